//! Viewport-bounded, debounced fetching from the spatial store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use medmap_core::{BoundingBox, GeoPoint, ViewportState};

use crate::capabilities::SpatialStore;
use crate::debounce::Debouncer;
use crate::state::{DirectoryState, Notices};

/// Advisory shown instead of fetching when the viewport is zoomed out past
/// the gate.
const ZOOM_ADVISORY: &str = "Zoom in to load more practitioners";

/// Drives bounding-box fetches as the visible map region settles.
///
/// Policy per settle event: gate on zoom, expand the box by the margin,
/// debounce, fetch with the result cap, replace the entity set in full.
/// The debounce cancels superseded settles; a generation counter guards the
/// state update against responses already in flight when a newer settle
/// arrived, since the network call itself cannot be cancelled.
pub struct ViewportSyncController {
    store: Arc<dyn SpatialStore>,
    directory: Arc<Mutex<DirectoryState>>,
    viewport: Arc<Mutex<ViewportState>>,
    notices: Arc<Mutex<Notices>>,
    debouncer: Debouncer,
    generation: Arc<AtomicU64>,
    min_fetch_zoom: u8,
    bbox_margin_deg: f64,
    fetch_result_cap: u32,
}

impl ViewportSyncController {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        store: Arc<dyn SpatialStore>,
        directory: Arc<Mutex<DirectoryState>>,
        viewport: Arc<Mutex<ViewportState>>,
        notices: Arc<Mutex<Notices>>,
        debounce_ms: u64,
        min_fetch_zoom: u8,
        bbox_margin_deg: f64,
        fetch_result_cap: u32,
    ) -> Self {
        Self {
            store,
            directory,
            viewport,
            notices,
            debouncer: Debouncer::new(Duration::from_millis(debounce_ms)),
            generation: Arc::new(AtomicU64::new(0)),
            min_fetch_zoom,
            bbox_margin_deg,
            fetch_result_cap,
        }
    }

    /// Handle a viewport-settle event from the presentation layer.
    pub fn viewport_settled(&self, bbox: BoundingBox, zoom: u8) {
        {
            let mut viewport = self.viewport.lock().expect("viewport state mutex poisoned");
            viewport.zoom = zoom;
            viewport.current = GeoPoint {
                lat: (bbox.min_lat + bbox.max_lat) / 2.0,
                lng: (bbox.min_lng + bbox.max_lng) / 2.0,
            };
        }

        if zoom <= self.min_fetch_zoom {
            tracing::debug!(zoom, gate = self.min_fetch_zoom, "zoom gate: skipping fetch");
            // A gated settle still supersedes any earlier settle: the pending
            // fetch must not fire and repopulate over the advisory.
            self.debouncer.cancel();
            self.generation.fetch_add(1, Ordering::SeqCst);
            self.notices
                .lock()
                .expect("notices mutex poisoned")
                .warning = Some(ZOOM_ADVISORY.to_owned());
            return;
        }

        let expanded = bbox.expanded(self.bbox_margin_deg);
        let cap = self.fetch_result_cap;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let store = Arc::clone(&self.store);
        let directory = Arc::clone(&self.directory);
        let notices = Arc::clone(&self.notices);
        let latest = Arc::clone(&self.generation);

        self.debouncer.schedule(async move {
            directory
                .lock()
                .expect("directory state mutex poisoned")
                .is_loading = true;

            let result = store.practitioners_in_bbox(expanded, cap).await;

            let mut directory = directory.lock().expect("directory state mutex poisoned");
            directory.is_loading = false;
            if latest.load(Ordering::SeqCst) != generation {
                tracing::debug!("discarding stale bounding-box response");
                return;
            }

            let mut notices = notices.lock().expect("notices mutex poisoned");
            match result {
                Ok(practitioners) => {
                    tracing::debug!(count = practitioners.len(), "entity set replaced");
                    directory.practitioners = practitioners;
                    notices.warning = None;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "bounding-box fetch failed");
                    notices.error = Some(format!("Failed to refresh map data: {e}"));
                }
            }
        });
    }
}
