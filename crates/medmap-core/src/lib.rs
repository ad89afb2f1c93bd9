pub mod config;
pub mod filter;
pub mod geo;
pub mod location;
pub mod practitioner;
pub mod schedule;
pub mod viewport;

pub use config::{load_app_config, load_app_config_from_env, AppConfig, ConfigError};
pub use filter::{apply_directory_filter, FilterState};
pub use geo::{BoundingBox, GeoPoint};
pub use location::{LocationCandidate, HK_DC_DISTRICTS_TC, UNKNOWN_LOCATION};
pub use practitioner::Practitioner;
pub use schedule::{
    evaluate, hong_kong, BusinessStatus, DaySchedule, Interval, TimeOfDay, Weekday,
    WeeklySchedule,
};
pub use viewport::ViewportState;
