//! Stateful coordination layer: debounced search, viewport-synchronized
//! fetching, and the action/snapshot contract the presentation layer talks to.
//!
//! Single-owner state discipline: every state slice is owned by exactly one
//! controller and exposed read-only through [`App::snapshot`]. Cross-component
//! effects go through the [`state::Action`] vocabulary only.

pub mod app;
pub mod capabilities;
pub mod debounce;
pub mod search;
pub mod state;
pub mod viewport_sync;

pub use app::App;
pub use capabilities::{FixedGeolocator, Gazetteer, GeolocationError, Geolocator, SpatialStore};
pub use debounce::Debouncer;
pub use state::{Action, Snapshot};
