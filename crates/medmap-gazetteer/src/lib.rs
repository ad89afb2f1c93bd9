//! Gazetteer lookup client and address normalization.
//!
//! Talks to an ALS-style address lookup service ("given a text query, return
//! raw candidate records") and turns its inconsistently-populated bilingual
//! records into deduplicated, displayable [`medmap_core::LocationCandidate`]s.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::GazetteerClient;
pub use error::GazetteerError;
pub use normalize::normalize;
pub use types::{LocaleFields, RawAddressRecord};
