//! Spatial-store client: "given a bounding box, return entities within it".
//!
//! The store keeps schedules and qualification lists as JSON serialized into
//! string columns; [`row::PractitionerRow::into_practitioner`] is the single
//! place that decodes them into typed values, so nothing downstream ever
//! re-parses per render.

pub mod client;
pub mod error;
pub mod row;

pub use client::StoreClient;
pub use error::StoreError;
pub use row::PractitionerRow;
