use thiserror::Error;

/// Errors from the gazetteer lookup capability.
///
/// Callers on the search path degrade every variant to an empty suggestion
/// list; the variants exist so logs can tell transport, status, and shape
/// failures apart.
#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
