//! HTTP client for the address lookup service.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GazetteerError;
use crate::types::{RawAddressRecord, WireLookupResponse};

const DEFAULT_BASE_URL: &str = "https://www.als.gov.hk/";

/// Client for an ALS-style `/lookup` endpoint.
///
/// Use [`GazetteerClient::new`] for production or
/// [`GazetteerClient::with_base_url`] to point at a mock server in tests.
pub struct GazetteerClient {
    client: Client,
    base_url: Url,
    /// Maximum suggestions requested per lookup (`n` query parameter).
    suggestion_cap: u32,
}

impl GazetteerClient {
    /// Creates a client pointed at the production lookup service.
    ///
    /// # Errors
    ///
    /// Returns [`GazetteerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, suggestion_cap: u32) -> Result<Self, GazetteerError> {
        Self::with_base_url(timeout_secs, suggestion_cap, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GazetteerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GazetteerError::UnexpectedStatus`] if
    /// `base_url` does not parse as a URL.
    pub fn with_base_url(
        timeout_secs: u64,
        suggestion_cap: u32,
        base_url: &str,
    ) -> Result<Self, GazetteerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("medmap/0.1 (practitioner-directory)")
            .build()?;

        // Ensure exactly one trailing slash so join() appends rather than
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GazetteerError::UnexpectedStatus {
            status: 0,
            url: format!("invalid base URL '{base_url}': {e}"),
        })?;

        Ok(Self {
            client,
            base_url,
            suggestion_cap,
        })
    }

    /// Look up raw address records for a free-text query.
    ///
    /// An empty query short-circuits to an empty list without a request.
    /// Records lacking coordinates are skipped during flattening; they never
    /// fail the whole lookup.
    ///
    /// # Errors
    ///
    /// - [`GazetteerError::Http`] on network failure.
    /// - [`GazetteerError::UnexpectedStatus`] on a non-2xx response.
    /// - [`GazetteerError::Deserialize`] if the body is not the expected JSON.
    pub async fn lookup(&self, query: &str) -> Result<Vec<RawAddressRecord>, GazetteerError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut url = self
            .base_url
            .join("lookup")
            .map_err(|e| GazetteerError::UnexpectedStatus {
                status: 0,
                url: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("n", &self.suggestion_cap.to_string());

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::ACCEPT_LANGUAGE, "en,zh-Hant")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GazetteerError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: WireLookupResponse =
            serde_json::from_str(&body).map_err(|e| GazetteerError::Deserialize {
                context: format!("lookup(q={query})"),
                source: e,
            })?;

        let records: Vec<RawAddressRecord> = parsed
            .suggested_addresses
            .into_iter()
            .filter_map(crate::types::WireSuggestedAddress::into_record)
            .collect();
        tracing::debug!(query, records = records.len(), "gazetteer lookup");
        Ok(records)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
