//! HTTP client for the bounding-box RPC exposed by the spatial store.

use std::time::Duration;

use medmap_core::{BoundingBox, Practitioner};
use reqwest::{Client, Url};
use serde::Serialize;

use crate::error::StoreError;
use crate::row::PractitionerRow;

/// JSON body of the bounding-box RPC.
#[derive(Debug, Serialize)]
struct BboxParams {
    min_lat: f64,
    min_long: f64,
    max_lat: f64,
    max_long: f64,
}

/// Client for a PostgREST-style spatial store.
///
/// Issues `POST {base}/rest/v1/rpc/get_practitioners_in_bbox` with the box
/// coordinates in the body and the result cap as a `limit` query parameter.
pub struct StoreClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl StoreClient {
    /// Creates a store client.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StoreError::UnexpectedStatus`] if
    /// `base_url` does not parse as a URL.
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("medmap/0.1 (practitioner-directory)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| StoreError::UnexpectedStatus {
            status: 0,
            url: format!("invalid base URL '{base_url}': {e}"),
        })?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_owned(),
        })
    }

    /// Fetch all practitioners inside the bounding box, up to `cap` rows.
    ///
    /// Rows are decoded into typed [`Practitioner`] values at this boundary;
    /// per-row irregularities (bad schedule JSON, odd qualification text)
    /// degrade inside the row decode and never fail the fetch.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Http`] on network failure.
    /// - [`StoreError::UnexpectedStatus`] on a non-2xx response.
    /// - [`StoreError::Deserialize`] if the body is not a JSON row array.
    pub async fn practitioners_in_bbox(
        &self,
        bbox: BoundingBox,
        cap: u32,
    ) -> Result<Vec<Practitioner>, StoreError> {
        let mut url = self
            .base_url
            .join("rest/v1/rpc/get_practitioners_in_bbox")
            .map_err(|e| StoreError::UnexpectedStatus {
                status: 0,
                url: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("limit", &cap.to_string());

        let response = self
            .client
            .post(url.clone())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&BboxParams {
                min_lat: bbox.min_lat,
                min_long: bbox.min_lng,
                max_lat: bbox.max_lat,
                max_long: bbox.max_lng,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let rows: Vec<PractitionerRow> =
            serde_json::from_str(&body).map_err(|e| StoreError::Deserialize {
                context: "get_practitioners_in_bbox".to_owned(),
                source: e,
            })?;

        tracing::debug!(
            rows = rows.len(),
            min_lat = bbox.min_lat,
            min_lng = bbox.min_lng,
            max_lat = bbox.max_lat,
            max_lng = bbox.max_lng,
            "bounding-box fetch"
        );
        Ok(rows
            .into_iter()
            .map(PractitionerRow::into_practitioner)
            .collect())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
