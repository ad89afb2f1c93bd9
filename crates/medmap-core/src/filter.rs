//! The single filtered/ordered view over the practitioner set.
//!
//! Both the list renderer and the map renderer must consume
//! [`apply_directory_filter`] with identical inputs per render cycle.
//! Divergent recomputation (each renderer ordering independently) is the
//! documented root cause of marker/list flicker in the system this replaces.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::practitioner::Practitioner;
use crate::schedule::{evaluate, BusinessStatus};

/// Active directory and candidate filters.
///
/// `None` (or an empty set/string) means "no filter" for that dimension.
/// `district` applies only to location-search candidates, never to
/// practitioners.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub specialty: Option<String>,
    pub statuses: Option<HashSet<BusinessStatus>>,
    /// Key of the pinned selection (see [`Practitioner::key`]).
    pub selected_key: Option<String>,
    pub district: Option<String>,
}

impl FilterState {
    fn specialty_matches(&self, practitioner: &Practitioner) -> bool {
        match self.specialty.as_deref() {
            None | Some("") => true,
            Some(specialty) => practitioner.specialty == specialty,
        }
    }

    fn status_matches(&self, status: BusinessStatus) -> bool {
        match &self.statuses {
            None => true,
            Some(set) if set.is_empty() => true,
            Some(set) => set.contains(&status),
        }
    }
}

/// Order and filter the entity set for rendering.
///
/// The pinned selection (if any) is emitted first and removed from its
/// original slot; all other entities keep their relative order. Specialty
/// and status filters apply after ordering. Status is evaluated against the
/// supplied instant and fixed zone, once per entity.
#[must_use]
pub fn apply_directory_filter(
    entities: &[Practitioner],
    filter: &FilterState,
    now: DateTime<Utc>,
    tz: FixedOffset,
) -> Vec<Practitioner> {
    let mut ordered: Vec<&Practitioner> = Vec::with_capacity(entities.len());
    if let Some(selected_key) = filter.selected_key.as_deref() {
        if let Some(selected) = entities.iter().find(|p| p.key() == selected_key) {
            ordered.push(selected);
        }
        ordered.extend(entities.iter().filter(|p| p.key() != selected_key));
    } else {
        ordered.extend(entities.iter());
    }

    ordered
        .into_iter()
        .filter(|p| filter.specialty_matches(p))
        .filter(|p| filter.status_matches(evaluate(&p.hours, now, tz)))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
