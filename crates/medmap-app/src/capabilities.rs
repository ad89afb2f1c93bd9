//! Capability traits the controllers depend on, and their production impls.
//!
//! Traits live on the consumer side so tests can swap in recording mocks;
//! the concrete HTTP clients from `medmap-gazetteer` and `medmap-store`
//! implement them directly.

use async_trait::async_trait;
use medmap_core::{BoundingBox, GeoPoint, Practitioner};
use medmap_gazetteer::{GazetteerClient, GazetteerError, RawAddressRecord};
use medmap_store::{StoreClient, StoreError};
use thiserror::Error;

/// Geolocation failure with a human-readable reason, consumed verbatim into
/// the user-facing error channel.
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct GeolocationError {
    pub reason: String,
}

impl GeolocationError {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// "Given a text query, return raw candidate records."
#[async_trait]
pub trait Gazetteer: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Vec<RawAddressRecord>, GazetteerError>;
}

/// "Given a bounding box, return entities within it."
#[async_trait]
pub trait SpatialStore: Send + Sync {
    async fn practitioners_in_bbox(
        &self,
        bbox: BoundingBox,
        cap: u32,
    ) -> Result<Vec<Practitioner>, StoreError>;
}

/// "Where is the user right now?"
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<GeoPoint, GeolocationError>;
}

#[async_trait]
impl Gazetteer for GazetteerClient {
    async fn lookup(&self, query: &str) -> Result<Vec<RawAddressRecord>, GazetteerError> {
        GazetteerClient::lookup(self, query).await
    }
}

#[async_trait]
impl SpatialStore for StoreClient {
    async fn practitioners_in_bbox(
        &self,
        bbox: BoundingBox,
        cap: u32,
    ) -> Result<Vec<Practitioner>, StoreError> {
        StoreClient::practitioners_in_bbox(self, bbox, cap).await
    }
}

/// Geolocator for hosts without a positioning source: returns a fixed point
/// when configured, otherwise the canonical "not supported" failure.
pub struct FixedGeolocator {
    position: Option<GeoPoint>,
}

impl FixedGeolocator {
    #[must_use]
    pub fn new(position: Option<GeoPoint>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<GeoPoint, GeolocationError> {
        self.position
            .ok_or_else(|| GeolocationError::new("Geolocation is not supported"))
    }
}
