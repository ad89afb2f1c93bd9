//! The directory entity: a medical practitioner with a clinic location.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::GeoPoint;
use crate::schedule::WeeklySchedule;

/// A practitioner record as produced by the spatial-store boundary.
///
/// Records are replaced wholesale on every successful bounding-box fetch and
/// never mutated in place. The serialized schedule and qualification columns
/// are already decoded into typed values by the time this struct exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Practitioner {
    /// Store-assigned stable id, when the store provides one.
    pub id: Option<Uuid>,
    pub name_tc: String,
    pub name_en: String,
    pub phone: String,
    /// Coarse specialty, the value specialty filters match against.
    pub specialty: String,
    pub specialty_detailed: String,
    pub address: String,
    pub location: GeoPoint,
    pub qualifications: Vec<String>,
    pub hours: WeeklySchedule,
}

impl Practitioner {
    /// Stable identity for selection and render keying.
    ///
    /// Prefers the store-assigned id; falls back to a composite derived from
    /// names and coarse specialty. Two distinct practitioners sharing all
    /// three fields collapse under the fallback — acceptable for render
    /// keying, which is why the store id wins whenever present.
    #[must_use]
    pub fn key(&self) -> String {
        match self.id {
            Some(id) => id.to_string(),
            None => self.derived_key(),
        }
    }

    /// Composite key from name and specialty fields.
    #[must_use]
    pub fn derived_key(&self) -> String {
        format!("{}|{}|{}", self.name_en, self.name_tc, self.specialty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn practitioner(id: Option<Uuid>) -> Practitioner {
        Practitioner {
            id,
            name_tc: "陳大文".to_owned(),
            name_en: "Dr. Chan Tai Man".to_owned(),
            phone: "2345 6789".to_owned(),
            specialty: "牙科".to_owned(),
            specialty_detailed: "牙齒矯正科".to_owned(),
            address: "123 Nathan Road".to_owned(),
            location: GeoPoint {
                lat: 22.3204,
                lng: 114.1698,
            },
            qualifications: vec![],
            hours: WeeklySchedule::default(),
        }
    }

    #[test]
    fn key_prefers_store_id() {
        let id = Uuid::new_v4();
        assert_eq!(practitioner(Some(id)).key(), id.to_string());
    }

    #[test]
    fn key_falls_back_to_derived_composite() {
        assert_eq!(
            practitioner(None).key(),
            "Dr. Chan Tai Man|陳大文|牙科"
        );
    }
}
