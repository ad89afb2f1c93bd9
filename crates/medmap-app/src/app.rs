//! Top-level coordinator: owns the state slices, wires the controllers, and
//! exposes the action/snapshot contract.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, FixedOffset, Utc};
use medmap_core::{
    apply_directory_filter, AppConfig, FilterState, GeoPoint, Practitioner, ViewportState,
};

use crate::capabilities::{Gazetteer, Geolocator, SpatialStore};
use crate::search::SearchCoordinator;
use crate::state::{Action, DirectoryState, Notices, SearchState, Snapshot};
use crate::viewport_sync::ViewportSyncController;

/// Default map center (Mong Kok) and zoom used before any user interaction.
const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 22.3204,
    lng: 114.1698,
};
const DEFAULT_ZOOM: u8 = 16;

type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// The application: state slices, controllers, and capabilities.
///
/// Dispatching actions requires a running tokio runtime (the debounced
/// channels spawn delayed tasks).
pub struct App {
    viewport: Arc<Mutex<ViewportState>>,
    filter: Arc<Mutex<FilterState>>,
    search_state: Arc<Mutex<SearchState>>,
    directory: Arc<Mutex<DirectoryState>>,
    notices: Arc<Mutex<Notices>>,
    search: SearchCoordinator,
    viewport_sync: ViewportSyncController,
    geolocator: Arc<dyn Geolocator>,
    recenter_zoom: u8,
    clock: Clock,
    tz: FixedOffset,
}

impl App {
    /// Build the app with wall-clock time in the fixed Hong Kong zone.
    #[must_use]
    pub fn new(
        config: &AppConfig,
        gazetteer: Arc<dyn Gazetteer>,
        store: Arc<dyn SpatialStore>,
        geolocator: Arc<dyn Geolocator>,
    ) -> Self {
        Self::with_clock(config, gazetteer, store, geolocator, Arc::new(Utc::now))
    }

    /// Build the app with an injected clock, for deterministic tests.
    #[must_use]
    pub fn with_clock(
        config: &AppConfig,
        gazetteer: Arc<dyn Gazetteer>,
        store: Arc<dyn SpatialStore>,
        geolocator: Arc<dyn Geolocator>,
        clock: Clock,
    ) -> Self {
        let viewport = Arc::new(Mutex::new(ViewportState::new(DEFAULT_CENTER, DEFAULT_ZOOM)));
        let filter = Arc::new(Mutex::new(FilterState::default()));
        let search_state = Arc::new(Mutex::new(SearchState::default()));
        let directory = Arc::new(Mutex::new(DirectoryState::default()));
        let notices = Arc::new(Mutex::new(Notices::default()));

        let search = SearchCoordinator::new(
            gazetteer,
            Arc::clone(&search_state),
            Arc::clone(&viewport),
            Arc::clone(&filter),
            config.search_debounce_ms,
            config.recenter_zoom,
        );
        let viewport_sync = ViewportSyncController::new(
            store,
            Arc::clone(&directory),
            Arc::clone(&viewport),
            Arc::clone(&notices),
            config.viewport_debounce_ms,
            config.min_fetch_zoom,
            config.bbox_margin_deg,
            config.fetch_result_cap,
        );

        Self {
            viewport,
            filter,
            search_state,
            directory,
            notices,
            search,
            viewport_sync,
            geolocator,
            recenter_zoom: config.recenter_zoom,
            clock,
            tz: medmap_core::hong_kong(),
        }
    }

    /// Apply one inbound event.
    pub fn dispatch(&self, action: Action) {
        match action {
            Action::SetQueryText(query) => self.search.set_query(&query),
            Action::SelectCandidate(candidate) => self.search.select_candidate(&candidate),
            Action::SetSpecialtyFilter(specialty) => {
                self.filter
                    .lock()
                    .expect("filter state mutex poisoned")
                    .specialty = specialty;
            }
            Action::SetStatusFilter(statuses) => {
                self.filter
                    .lock()
                    .expect("filter state mutex poisoned")
                    .statuses = statuses;
            }
            Action::SetDistrictFilter(district) => {
                self.filter
                    .lock()
                    .expect("filter state mutex poisoned")
                    .district = district;
            }
            Action::SelectEntity(key) => {
                self.filter
                    .lock()
                    .expect("filter state mutex poisoned")
                    .selected_key = key;
            }
            Action::RecenterToCurrentLocation => self.recenter_to_current_location(),
            Action::ViewportSettled { bbox, zoom } => {
                self.viewport_sync.viewport_settled(bbox, zoom);
            }
            Action::ToggleRecenter => {
                let mut viewport = self.viewport.lock().expect("viewport state mutex poisoned");
                viewport.recenter_flag = !viewport.recenter_flag;
            }
        }
    }

    /// Resolve the device position and jump there; failure reasons surface
    /// verbatim on the error channel.
    fn recenter_to_current_location(&self) {
        let geolocator = Arc::clone(&self.geolocator);
        let viewport = Arc::clone(&self.viewport);
        let notices = Arc::clone(&self.notices);
        let recenter_zoom = self.recenter_zoom;
        tokio::spawn(async move {
            match geolocator.current_position().await {
                Ok(point) => {
                    viewport
                        .lock()
                        .expect("viewport state mutex poisoned")
                        .recenter(point, recenter_zoom);
                }
                Err(e) => {
                    tracing::debug!(error = %e, "geolocation failed");
                    notices.lock().expect("notices mutex poisoned").error = Some(e.reason);
                }
            }
        });
    }

    /// Clone a read-only view of all published state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let viewport = *self.viewport.lock().expect("viewport state mutex poisoned");
        let filter = self
            .filter
            .lock()
            .expect("filter state mutex poisoned")
            .clone();
        let search = self
            .search_state
            .lock()
            .expect("search state mutex poisoned")
            .clone();
        let directory = self
            .directory
            .lock()
            .expect("directory state mutex poisoned")
            .clone();
        let notices = self
            .notices
            .lock()
            .expect("notices mutex poisoned")
            .clone();

        Snapshot {
            viewport,
            filter,
            practitioners: directory.practitioners,
            candidates: search.candidates,
            is_loading: directory.is_loading,
            warning: notices.warning,
            error: notices.error,
            query: search.query,
        }
    }

    /// The filtered, ordered entity list both renderers must consume.
    ///
    /// Centralizing this is what keeps the list view and the map view from
    /// deriving divergent orders and flickering against each other.
    #[must_use]
    pub fn visible_practitioners(&self) -> Vec<Practitioner> {
        let filter = self
            .filter
            .lock()
            .expect("filter state mutex poisoned")
            .clone();
        let directory = self
            .directory
            .lock()
            .expect("directory state mutex poisoned");
        apply_directory_filter(&directory.practitioners, &filter, (self.clock)(), self.tz)
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
