//! State slices, the read-only snapshot, and the inbound action vocabulary.

use std::collections::HashSet;

use medmap_core::{
    BoundingBox, BusinessStatus, FilterState, LocationCandidate, Practitioner, ViewportState,
};

/// Search slice, owned by the `SearchCoordinator`.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub candidates: Vec<LocationCandidate>,
}

/// Directory slice, owned by the `ViewportSyncController`.
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    pub practitioners: Vec<Practitioner>,
    pub is_loading: bool,
}

/// User-facing advisory and error strings.
///
/// `warning` carries recoverable, user-actionable conditions ("zoom in");
/// `error` carries capability failures the user should know about.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    pub warning: Option<String>,
    pub error: Option<String>,
}

/// Read-only view of the whole application state, cloned per render cycle.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub viewport: ViewportState,
    pub filter: FilterState,
    pub practitioners: Vec<Practitioner>,
    pub candidates: Vec<LocationCandidate>,
    pub is_loading: bool,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub query: String,
}

/// The fixed inbound event vocabulary. The presentation layer may only
/// affect state by dispatching these.
#[derive(Debug, Clone)]
pub enum Action {
    SetQueryText(String),
    SelectCandidate(LocationCandidate),
    /// `None` or `Some("")` clears the specialty filter.
    SetSpecialtyFilter(Option<String>),
    /// `None` or an empty set clears the status filter.
    SetStatusFilter(Option<HashSet<BusinessStatus>>),
    /// District filter over search candidates; `None` clears it.
    SetDistrictFilter(Option<String>),
    /// Pin a practitioner by key; `None` unpins.
    SelectEntity(Option<String>),
    RecenterToCurrentLocation,
    ViewportSettled {
        bbox: BoundingBox,
        zoom: u8,
    },
    ToggleRecenter,
}
