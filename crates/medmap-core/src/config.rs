//! Application configuration loaded from environment variables.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Tuning knobs and endpoints for the whole system.
///
/// Timing and geometry values default to the converged reference values;
/// each can be overridden through its `MEDMAP_*` environment variable.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gazetteer lookup service base URL (e.g. `https://www.als.gov.hk`).
    pub gazetteer_base_url: String,
    /// Maximum number of suggestions requested per gazetteer lookup.
    pub gazetteer_suggestion_cap: u32,
    /// Spatial store base URL.
    pub store_base_url: String,
    /// Spatial store API key; sent as both `apikey` and bearer token.
    pub store_api_key: String,
    /// Quiescence delay for the search-query debounce channel.
    pub search_debounce_ms: u64,
    /// Quiescence delay for the viewport-settle debounce channel.
    pub viewport_debounce_ms: u64,
    /// Settles at or below this zoom level never fetch; the user is told to
    /// zoom in instead.
    pub min_fetch_zoom: u8,
    /// Zoom level applied when jumping to a searched or located point.
    pub recenter_zoom: u8,
    /// Symmetric bounding-box expansion in degrees (~60–70 m) so markers at
    /// the viewport edge are not clipped.
    pub bbox_margin_deg: f64,
    /// Maximum entities per bounding-box fetch.
    pub fetch_result_cap: u32,
    /// HTTP request timeout for both capabilities.
    pub request_timeout_secs: u64,
}

/// Load configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading.
///
/// # Errors
///
/// Returns [`ConfigError`] if required variables are missing or values are
/// not parseable.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load configuration from variables already in the process environment.
///
/// Unlike [`load_app_config`], this does not read `.env` files.
///
/// # Errors
///
/// Returns [`ConfigError`] if required variables are missing or values are
/// not parseable.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration through the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_owned()))
    };

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_owned()) };

    let parse_u8 = |var: &str, default: &str| -> Result<u8, ConfigError> {
        or_default(var, default)
            .parse::<u8>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_owned(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_owned(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_owned(),
                reason: e.to_string(),
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        or_default(var, default)
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_owned(),
                reason: e.to_string(),
            })
    };

    Ok(AppConfig {
        gazetteer_base_url: or_default("MEDMAP_GAZETTEER_BASE_URL", "https://www.als.gov.hk"),
        gazetteer_suggestion_cap: parse_u32("MEDMAP_GAZETTEER_SUGGESTION_CAP", "20")?,
        store_base_url: require("MEDMAP_STORE_BASE_URL")?,
        store_api_key: require("MEDMAP_STORE_API_KEY")?,
        search_debounce_ms: parse_u64("MEDMAP_SEARCH_DEBOUNCE_MS", "300")?,
        viewport_debounce_ms: parse_u64("MEDMAP_VIEWPORT_DEBOUNCE_MS", "250")?,
        min_fetch_zoom: parse_u8("MEDMAP_MIN_FETCH_ZOOM", "15")?,
        recenter_zoom: parse_u8("MEDMAP_RECENTER_ZOOM", "20")?,
        bbox_margin_deg: parse_f64("MEDMAP_BBOX_MARGIN_DEG", "0.0006")?,
        fetch_result_cap: parse_u32("MEDMAP_FETCH_RESULT_CAP", "2000")?,
        request_timeout_secs: parse_u64("MEDMAP_REQUEST_TIMEOUT_SECS", "10")?,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
