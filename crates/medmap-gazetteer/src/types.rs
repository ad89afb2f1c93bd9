//! Wire types for the address lookup service and their flattened domain form.
//!
//! The wire schema nests every structured field several levels deep and
//! prefixes locale-specific sub-objects (`ChiBlock`/`EngBlock`, ...). Both
//! locales share one set of serde structs via field aliases, and everything
//! is optional — partial records are the norm, not an error.

use medmap_core::GeoPoint;
use serde::Deserialize;

/// Top-level lookup response envelope.
#[derive(Debug, Default, Deserialize)]
pub struct WireLookupResponse {
    #[serde(rename = "SuggestedAddress", default)]
    pub suggested_addresses: Vec<WireSuggestedAddress>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireSuggestedAddress {
    #[serde(rename = "Address", default)]
    pub address: Option<WireAddress>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireAddress {
    #[serde(rename = "PremisesAddress", default)]
    pub premises: Option<WirePremisesAddress>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WirePremisesAddress {
    #[serde(rename = "GeospatialInformation", default)]
    pub geospatial: Option<WireGeospatial>,
    #[serde(rename = "ChiPremisesAddress", default)]
    pub chi: Option<WireLocaleAddress>,
    #[serde(rename = "EngPremisesAddress", default)]
    pub eng: Option<WireLocaleAddress>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireGeospatial {
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
}

/// One locale's structured premises fields.
///
/// Chinese and English payloads differ only in sub-object key prefixes, so a
/// single struct with aliases deserializes both.
#[derive(Debug, Default, Deserialize)]
pub struct WireLocaleAddress {
    #[serde(rename = "BuildingName")]
    pub building_name: Option<String>,
    #[serde(rename = "ChiBlock", alias = "EngBlock")]
    pub block: Option<WireBlock>,
    #[serde(rename = "ChiEstate", alias = "EngEstate")]
    pub estate: Option<WireEstate>,
    #[serde(rename = "ChiVillage", alias = "EngVillage")]
    pub village: Option<WireVillage>,
    #[serde(rename = "ChiStreet", alias = "EngStreet")]
    pub street: Option<WireStreet>,
    #[serde(rename = "ChiDistrict", alias = "EngDistrict")]
    pub district: Option<WireDistrict>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireBlock {
    #[serde(rename = "BlockDescriptor")]
    pub block_descriptor: Option<String>,
    #[serde(rename = "BlockNo")]
    pub block_no: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireEstate {
    #[serde(rename = "EstateName")]
    pub estate_name: Option<String>,
    #[serde(rename = "ChiPhase", alias = "EngPhase")]
    pub phase: Option<WirePhase>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WirePhase {
    #[serde(rename = "PhaseName")]
    pub phase_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireVillage {
    #[serde(rename = "VillageName")]
    pub village_name: Option<String>,
    #[serde(rename = "BuildingNoFrom")]
    pub building_no_from: Option<String>,
    #[serde(rename = "BuildingNoTo")]
    pub building_no_to: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireStreet {
    #[serde(rename = "StreetName")]
    pub street_name: Option<String>,
    #[serde(rename = "BuildingNoFrom")]
    pub building_no_from: Option<String>,
    #[serde(rename = "BuildingNoTo")]
    pub building_no_to: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireDistrict {
    #[serde(rename = "DcDistrict")]
    pub dc_district: Option<String>,
}

/// One locale's fields, flattened for the normalizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleFields {
    pub building_name: Option<String>,
    pub block_descriptor: Option<String>,
    pub block_no: Option<String>,
    pub estate_name: Option<String>,
    pub estate_phase_name: Option<String>,
    pub village_name: Option<String>,
    pub village_building_no_from: Option<String>,
    pub village_building_no_to: Option<String>,
    pub street_name: Option<String>,
    pub street_building_no_from: Option<String>,
    pub street_building_no_to: Option<String>,
    pub district: Option<String>,
}

/// A raw gazetteer record with both locales flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAddressRecord {
    pub point: GeoPoint,
    pub tc: LocaleFields,
    pub en: LocaleFields,
}

/// Treat whitespace-only wire strings as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}

impl From<WireLocaleAddress> for LocaleFields {
    fn from(wire: WireLocaleAddress) -> Self {
        let (block_descriptor, block_no) = wire
            .block
            .map(|b| (b.block_descriptor, b.block_no))
            .unwrap_or_default();
        let (estate_name, estate_phase_name) = wire
            .estate
            .map(|e| (e.estate_name, e.phase.and_then(|p| p.phase_name)))
            .unwrap_or_default();
        let (village_name, village_building_no_from, village_building_no_to) = wire
            .village
            .map(|v| (v.village_name, v.building_no_from, v.building_no_to))
            .unwrap_or_default();
        let (street_name, street_building_no_from, street_building_no_to) = wire
            .street
            .map(|s| (s.street_name, s.building_no_from, s.building_no_to))
            .unwrap_or_default();

        Self {
            building_name: non_blank(wire.building_name),
            block_descriptor: non_blank(block_descriptor),
            block_no: non_blank(block_no),
            estate_name: non_blank(estate_name),
            estate_phase_name: non_blank(estate_phase_name),
            village_name: non_blank(village_name),
            village_building_no_from: non_blank(village_building_no_from),
            village_building_no_to: non_blank(village_building_no_to),
            street_name: non_blank(street_name),
            street_building_no_from: non_blank(street_building_no_from),
            street_building_no_to: non_blank(street_building_no_to),
            district: non_blank(wire.district.and_then(|d| d.dc_district)),
        }
    }
}

impl WireSuggestedAddress {
    /// Flatten one wire record; `None` when the record lacks coordinates.
    #[must_use]
    pub fn into_record(self) -> Option<RawAddressRecord> {
        let premises = self.address?.premises?;
        let geospatial = premises.geospatial?;
        let point = GeoPoint {
            lat: geospatial.latitude?,
            lng: geospatial.longitude?,
        };
        Some(RawAddressRecord {
            point,
            tc: premises.chi.map(LocaleFields::from).unwrap_or_default(),
            en: premises.eng.map(LocaleFields::from).unwrap_or_default(),
        })
    }
}
