//! Viewport state shared with the presentation layer.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Current map viewport.
///
/// `center` is the authoritative target driving recentering; `current` is the
/// live position during free panning, and the two diverge mid-gesture.
/// `recenter_flag` only edge-triggers the presentation layer — its value
/// carries no meaning beyond "recentering intent changed".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub center: GeoPoint,
    pub current: GeoPoint,
    pub zoom: u8,
    pub recenter_flag: bool,
}

impl ViewportState {
    #[must_use]
    pub fn new(center: GeoPoint, zoom: u8) -> Self {
        Self {
            center,
            current: center,
            zoom,
            recenter_flag: false,
        }
    }

    /// Set a new authoritative center and zoom, toggling the recenter flag.
    pub fn recenter(&mut self, point: GeoPoint, zoom: u8) {
        self.center = point;
        self.current = point;
        self.zoom = zoom;
        self.recenter_flag = !self.recenter_flag;
    }
}
