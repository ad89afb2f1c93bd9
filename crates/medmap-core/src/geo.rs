//! Geographic primitives shared across the workspace.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A rectangular geographic region used to query the spatial store.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Grow the box symmetrically by `margin_deg` in all four directions.
    ///
    /// Used to over-fetch slightly past the visible viewport so markers near
    /// the edge are not clipped when the map settles.
    #[must_use]
    pub fn expanded(&self, margin_deg: f64) -> Self {
        Self {
            min_lat: self.min_lat - margin_deg,
            min_lng: self.min_lng - margin_deg,
            max_lat: self.max_lat + margin_deg,
            max_lng: self.max_lng + margin_deg,
        }
    }
}
