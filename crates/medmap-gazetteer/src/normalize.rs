//! Normalization from raw gazetteer records to displayable candidates.
//!
//! The gazetteer populates structured fields inconsistently, so the display
//! description falls through a strict precedence chain per locale: building,
//! estate, village, street, then the `UNKNOWN LOCATION` sentinel.
//!
//! Acceptance policy: a record survives when *either* locale carries a
//! building or estate name. Records resolvable only through village or
//! street fields are dropped silently. Candidates are deduplicated by their
//! Chinese-locale description, first occurrence wins, and survivor order
//! follows the gazetteer's ranking.

use std::collections::HashSet;

use medmap_core::{LocationCandidate, UNKNOWN_LOCATION};

use crate::types::{LocaleFields, RawAddressRecord};

fn join_present(parts: &[Option<&str>], separator: &str) -> String {
    parts
        .iter()
        .filter_map(|p| *p)
        .collect::<Vec<_>>()
        .join(separator)
        .trim()
        .to_owned()
}

/// Estate name with phase appended, e.g. `"麗港城 第2期"`.
fn estate_desc(fields: &LocaleFields) -> String {
    join_present(
        &[
            fields.estate_name.as_deref(),
            fields.estate_phase_name.as_deref(),
        ],
        " ",
    )
}

/// Building-level description: estate + building name + block when both
/// exist; block info is still appended when the building name stands alone.
fn building_desc(fields: &LocaleFields) -> String {
    let block = join_present(
        &[fields.block_no.as_deref(), fields.block_descriptor.as_deref()],
        "",
    );
    let block = if block.is_empty() {
        None
    } else {
        Some(block)
    };

    let estate = estate_desc(fields);
    if !estate.is_empty() {
        if let Some(building_name) = fields.building_name.as_deref() {
            return join_present(
                &[Some(estate.as_str()), Some(building_name), block.as_deref()],
                " ",
            );
        }
    }

    let name = fields
        .building_name
        .as_deref()
        .map(str::to_owned)
        .unwrap_or(estate);
    let name = if name.is_empty() { None } else { Some(name) };
    join_present(&[name.as_deref(), block.as_deref()], " ")
}

fn village_desc(fields: &LocaleFields) -> String {
    let no_range = join_present(
        &[
            fields.village_building_no_from.as_deref(),
            fields.village_building_no_to.as_deref(),
        ],
        " - ",
    );
    let no_range = if no_range.is_empty() {
        None
    } else {
        Some(no_range)
    };
    join_present(&[fields.village_name.as_deref(), no_range.as_deref()], " ")
}

fn street_desc(fields: &LocaleFields) -> String {
    let no_range = join_present(
        &[
            fields.street_building_no_from.as_deref(),
            fields.street_building_no_to.as_deref(),
        ],
        " - ",
    );
    let no_range = if no_range.is_empty() {
        None
    } else {
        Some(no_range)
    };
    join_present(&[fields.street_name.as_deref(), no_range.as_deref()], " ")
}

/// Render one locale's primary description through the fallback chain.
///
/// Never returns an empty string; [`UNKNOWN_LOCATION`] is the terminal
/// fallback.
#[must_use]
pub fn describe(fields: &LocaleFields) -> String {
    for candidate in [
        building_desc(fields),
        estate_desc(fields),
        village_desc(fields),
        street_desc(fields),
    ] {
        if !candidate.is_empty() {
            return candidate;
        }
    }
    UNKNOWN_LOCATION.to_owned()
}

/// A locale carries a usable building-or-estate signal.
fn has_building_or_estate(fields: &LocaleFields) -> bool {
    fields.building_name.is_some() || fields.estate_name.is_some()
}

/// Normalize raw gazetteer records into deduplicated display candidates.
#[must_use]
pub fn normalize(records: Vec<RawAddressRecord>) -> Vec<LocationCandidate> {
    let total = records.len();
    let mut seen_desc_tc: HashSet<String> = HashSet::new();
    let candidates: Vec<LocationCandidate> = records
        .into_iter()
        .filter(|r| has_building_or_estate(&r.tc) || has_building_or_estate(&r.en))
        .filter_map(|r| {
            let desc_tc = describe(&r.tc);
            if !seen_desc_tc.insert(desc_tc.clone()) {
                return None;
            }
            Some(LocationCandidate {
                point: r.point,
                desc_tc,
                desc_en: describe(&r.en),
                supp_desc_tc: r.tc.district.unwrap_or_default(),
                supp_desc_en: r.en.district.unwrap_or_default(),
            })
        })
        .collect();

    tracing::debug!(
        raw = total,
        candidates = candidates.len(),
        "normalized gazetteer records"
    );
    candidates
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
