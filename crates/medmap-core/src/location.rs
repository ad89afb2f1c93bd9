//! Resolved, displayable address suggestions.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Fallback shown when no structured address field is populated in a locale.
pub const UNKNOWN_LOCATION: &str = "UNKNOWN LOCATION";

/// The eighteen Hong Kong district-council districts, traditional Chinese.
///
/// The gazetteer's supplementary descriptor is always one of these, so the
/// list doubles as the vocabulary for district filtering.
pub const HK_DC_DISTRICTS_TC: [&str; 18] = [
    "中西區",
    "灣仔區",
    "東區",
    "南區",
    "油尖旺區",
    "深水埗區",
    "九龍城區",
    "黃大仙區",
    "觀塘區",
    "荃灣區",
    "屯門區",
    "元朗區",
    "北區",
    "大埔區",
    "西貢區",
    "沙田區",
    "葵青區",
    "離島區",
];

/// A normalized, human-displayable place suggestion.
///
/// `desc_tc`/`desc_en` are never empty; [`UNKNOWN_LOCATION`] stands in when a
/// locale has no usable structured fields. The supplementary descriptors hold
/// the administrative district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCandidate {
    pub point: GeoPoint,
    pub desc_tc: String,
    pub desc_en: String,
    pub supp_desc_tc: String,
    pub supp_desc_en: String,
}
