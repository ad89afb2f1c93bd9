//! Wire row shape and the boundary decode into [`Practitioner`].

use medmap_core::{GeoPoint, Practitioner, WeeklySchedule};
use serde::Deserialize;
use uuid::Uuid;

/// One row from the practitioner table, fields named as stored.
///
/// `qualifications` and `openingHours` hold JSON serialized into strings;
/// they are decoded exactly once, here.
#[derive(Debug, Clone, Deserialize)]
pub struct PractitionerRow {
    /// Store-assigned row id, when the store exposes one.
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(rename = "doctorNameTC")]
    pub doctor_name_tc: String,
    #[serde(rename = "doctorNameEN")]
    pub doctor_name_en: String,
    pub telephone: String,
    #[serde(rename = "medicalSpecialty")]
    pub medical_specialty: String,
    #[serde(rename = "medicalSpecialtyDetailed", default)]
    pub medical_specialty_detailed: String,
    #[serde(rename = "addressDesc")]
    pub address_desc: String,
    #[serde(rename = "addressLatitude")]
    pub address_latitude: f64,
    #[serde(rename = "addressLongitude")]
    pub address_longitude: f64,
    #[serde(default)]
    pub qualifications: String,
    #[serde(rename = "openingHours", default)]
    pub opening_hours: String,
}

impl PractitionerRow {
    /// Decode the serialized columns and produce the typed entity.
    ///
    /// Malformed data degrades instead of erroring: an unparseable schedule
    /// becomes an empty one (every day "no information"), and an unparseable
    /// qualification list keeps the raw text as a single entry.
    #[must_use]
    pub fn into_practitioner(self) -> Practitioner {
        let hours: WeeklySchedule = match serde_json::from_str(&self.opening_hours) {
            Ok(hours) => hours,
            Err(e) => {
                tracing::debug!(
                    practitioner = %self.doctor_name_en,
                    error = %e,
                    "unparseable openingHours column; treating as no information"
                );
                WeeklySchedule::default()
            }
        };

        let qualifications: Vec<String> = match serde_json::from_str(&self.qualifications) {
            Ok(list) => list,
            Err(_) if self.qualifications.trim().is_empty() => Vec::new(),
            Err(_) => vec![self.qualifications.clone()],
        };

        Practitioner {
            id: self.id,
            name_tc: self.doctor_name_tc,
            name_en: self.doctor_name_en,
            phone: self.telephone,
            specialty: self.medical_specialty,
            specialty_detailed: self.medical_specialty_detailed,
            address: self.address_desc,
            location: GeoPoint {
                lat: self.address_latitude,
                lng: self.address_longitude,
            },
            qualifications,
            hours,
        }
    }
}
