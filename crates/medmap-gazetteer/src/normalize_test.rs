use super::*;
use medmap_core::GeoPoint;

fn point(lat: f64) -> GeoPoint {
    GeoPoint { lat, lng: 114.16 }
}

fn record(tc: LocaleFields, en: LocaleFields) -> RawAddressRecord {
    RawAddressRecord {
        point: point(22.3),
        tc,
        en,
    }
}

fn building(name: &str) -> LocaleFields {
    LocaleFields {
        building_name: Some(name.to_owned()),
        ..LocaleFields::default()
    }
}

// ---------------------------------------------------------------------------
// describe
// ---------------------------------------------------------------------------

#[test]
fn describe_building_with_estate_and_block() {
    let fields = LocaleFields {
        building_name: Some("曉峰閣".to_owned()),
        estate_name: Some("曉麗苑".to_owned()),
        estate_phase_name: Some("第1期".to_owned()),
        block_no: Some("3".to_owned()),
        block_descriptor: Some("座".to_owned()),
        ..LocaleFields::default()
    };
    assert_eq!(describe(&fields), "曉麗苑 第1期 曉峰閣 3座");
}

#[test]
fn describe_building_without_estate_keeps_block() {
    let fields = LocaleFields {
        building_name: Some("Tower A".to_owned()),
        block_no: Some("2".to_owned()),
        ..LocaleFields::default()
    };
    assert_eq!(describe(&fields), "Tower A 2");
}

#[test]
fn describe_falls_back_to_estate_alone() {
    let fields = LocaleFields {
        estate_name: Some("Mei Foo Sun Chuen".to_owned()),
        estate_phase_name: Some("Phase 4".to_owned()),
        ..LocaleFields::default()
    };
    assert_eq!(describe(&fields), "Mei Foo Sun Chuen Phase 4");
}

#[test]
fn describe_falls_back_to_village_with_number_range() {
    let fields = LocaleFields {
        village_name: Some("大圍村".to_owned()),
        village_building_no_from: Some("1".to_owned()),
        village_building_no_to: Some("3".to_owned()),
        ..LocaleFields::default()
    };
    assert_eq!(describe(&fields), "大圍村 1 - 3");
}

#[test]
fn describe_falls_back_to_street_with_number_range() {
    let fields = LocaleFields {
        street_name: Some("Castle Peak Road".to_owned()),
        street_building_no_from: Some("100".to_owned()),
        ..LocaleFields::default()
    };
    assert_eq!(describe(&fields), "Castle Peak Road 100");
}

#[test]
fn describe_empty_fields_yields_sentinel() {
    assert_eq!(describe(&LocaleFields::default()), "UNKNOWN LOCATION");
}

// ---------------------------------------------------------------------------
// normalize: acceptance policy
// ---------------------------------------------------------------------------

#[test]
fn accepts_when_only_one_locale_has_building_signal() {
    // TC carries a building name; EN resolves only through street.
    let en = LocaleFields {
        street_name: Some("Nathan Road".to_owned()),
        ..LocaleFields::default()
    };
    let out = normalize(vec![record(building("海港中心"), en)]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].desc_tc, "海港中心");
    assert_eq!(out[0].desc_en, "Nathan Road");
}

/// Regression pin for the acceptance policy: a record with only street-level
/// Chinese fields and only village-level English fields carries no
/// building-or-estate signal in either locale, so it is rejected.
#[test]
fn rejects_street_only_tc_and_village_only_en() {
    let tc = LocaleFields {
        street_name: Some("青山道".to_owned()),
        street_building_no_from: Some("10".to_owned()),
        ..LocaleFields::default()
    };
    let en = LocaleFields {
        village_name: Some("Tai Wai Village".to_owned()),
        ..LocaleFields::default()
    };
    assert!(normalize(vec![record(tc, en)]).is_empty());
}

#[test]
fn accepted_record_with_empty_en_locale_uses_sentinel() {
    let out = normalize(vec![record(building("金門大廈"), LocaleFields::default())]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].desc_en, "UNKNOWN LOCATION");
    assert!(!out[0].desc_tc.is_empty());
}

// ---------------------------------------------------------------------------
// normalize: dedup and ordering
// ---------------------------------------------------------------------------

#[test]
fn dedups_by_chinese_description_first_wins() {
    let first = RawAddressRecord {
        point: point(22.30),
        tc: building("同一大廈"),
        en: building("Same Building"),
    };
    let second = RawAddressRecord {
        point: point(22.99),
        tc: building("同一大廈"),
        en: building("Same Building Annex"),
    };
    let out = normalize(vec![first, second]);
    assert_eq!(out.len(), 1);
    // First occurrence wins, including its coordinate.
    assert!((out[0].point.lat - 22.30).abs() < 1e-9);
}

#[test]
fn survivors_keep_gazetteer_order() {
    let names = ["丙大廈", "甲大廈", "乙大廈"];
    let records: Vec<RawAddressRecord> = names
        .iter()
        .map(|&n| record(building(n), building(n)))
        .collect();
    let out = normalize(records);
    let got: Vec<&str> = out.iter().map(|c| c.desc_tc.as_str()).collect();
    assert_eq!(got, names);
}

#[test]
fn district_flows_into_supplementary_descriptors() {
    let mut tc = building("美孚新邨");
    tc.district = Some("深水埗區".to_owned());
    let mut en = building("Mei Foo Sun Chuen");
    en.district = Some("Sham Shui Po District".to_owned());
    let out = normalize(vec![record(tc, en)]);
    assert_eq!(out[0].supp_desc_tc, "深水埗區");
    assert_eq!(out[0].supp_desc_en, "Sham Shui Po District");
}
