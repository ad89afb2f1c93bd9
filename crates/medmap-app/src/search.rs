//! Debounced address search over the gazetteer capability.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use medmap_core::{FilterState, LocationCandidate, ViewportState};
use medmap_gazetteer::normalize;

use crate::capabilities::Gazetteer;
use crate::debounce::Debouncer;
use crate::state::SearchState;

/// Coordinates free-text address search: debounce, fetch, normalize,
/// district-filter, publish.
///
/// Only the most recently issued query's result is ever applied; the
/// debounce cancels pending cycles and a generation counter discards
/// responses that were already in flight when a newer query arrived.
pub struct SearchCoordinator {
    gazetteer: Arc<dyn Gazetteer>,
    state: Arc<Mutex<SearchState>>,
    viewport: Arc<Mutex<ViewportState>>,
    filter: Arc<Mutex<FilterState>>,
    debouncer: Debouncer,
    generation: Arc<AtomicU64>,
    recenter_zoom: u8,
}

impl SearchCoordinator {
    pub(crate) fn new(
        gazetteer: Arc<dyn Gazetteer>,
        state: Arc<Mutex<SearchState>>,
        viewport: Arc<Mutex<ViewportState>>,
        filter: Arc<Mutex<FilterState>>,
        debounce_ms: u64,
        recenter_zoom: u8,
    ) -> Self {
        Self {
            gazetteer,
            state,
            viewport,
            filter,
            debouncer: Debouncer::new(Duration::from_millis(debounce_ms)),
            generation: Arc::new(AtomicU64::new(0)),
            recenter_zoom,
        }
    }

    /// Record the new query text and schedule a debounced fetch-and-normalize
    /// cycle; any pending cycle for the previous text is cancelled.
    ///
    /// A failed or malformed gazetteer response publishes an empty candidate
    /// list — search degrades to "no suggestions", never a user-facing error.
    pub fn set_query(&self, query: &str) {
        self.state
            .lock()
            .expect("search state mutex poisoned")
            .query = query.to_owned();

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let gazetteer = Arc::clone(&self.gazetteer);
        let state = Arc::clone(&self.state);
        let filter = Arc::clone(&self.filter);
        let latest = Arc::clone(&self.generation);
        let query = query.to_owned();

        self.debouncer.schedule(async move {
            let records = match gazetteer.lookup(&query).await {
                Ok(records) => records,
                Err(e) => {
                    tracing::debug!(query, error = %e, "gazetteer lookup failed; no suggestions");
                    Vec::new()
                }
            };
            let mut candidates = normalize(records);

            let district = filter
                .lock()
                .expect("filter state mutex poisoned")
                .district
                .clone();
            if let Some(district) = district.filter(|d| !d.is_empty()) {
                candidates
                    .retain(|c| c.supp_desc_tc == district || c.supp_desc_en == district);
            }

            if latest.load(Ordering::SeqCst) != generation {
                tracing::debug!(query, "discarding stale gazetteer response");
                return;
            }
            state
                .lock()
                .expect("search state mutex poisoned")
                .candidates = candidates;
        });
    }

    /// Apply a selected candidate: publish its coordinate as the new
    /// authoritative center at the recenter zoom, and close the suggestion
    /// list. Any in-flight lookup for the open query is invalidated.
    pub fn select_candidate(&self, candidate: &LocationCandidate) {
        self.debouncer.cancel();
        self.generation.fetch_add(1, Ordering::SeqCst);

        {
            let mut state = self.state.lock().expect("search state mutex poisoned");
            state.query = candidate.desc_tc.clone();
            state.candidates.clear();
        }
        self.viewport
            .lock()
            .expect("viewport state mutex poisoned")
            .recenter(candidate.point, self.recenter_zoom);
        tracing::debug!(
            desc_tc = %candidate.desc_tc,
            lat = candidate.point.lat,
            lng = candidate.point.lng,
            "candidate selected"
        );
    }
}
