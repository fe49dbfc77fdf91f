//! HTTP client for the Algolia batch write endpoint.
//!
//! Records are written with one `POST /1/indexes/{index}/batch` call using the
//! `updateObject` action, which creates the object or replaces an existing
//! one with the same `objectID`. The whole batch is accepted or the call
//! fails; there is no per-record error splitting and no retry.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use shopsync_core::SearchRecord;

use crate::error::IndexError;

const APP_ID_HEADER: &str = "X-Algolia-Application-Id";
const API_KEY_HEADER: &str = "X-Algolia-API-Key";

/// Client bound to a single index.
///
/// Built once at startup and shared by every sync call of the run. Use
/// [`IndexClient::new`] for production or [`IndexClient::with_base_url`] to
/// point at a mock server in tests.
pub struct IndexClient {
    client: Client,
    app_id: String,
    api_key: String,
    index_name: String,
    batch_url: Url,
}

#[derive(Serialize)]
struct BatchRequest<'a> {
    requests: Vec<BatchOperation<'a>>,
}

#[derive(Serialize)]
struct BatchOperation<'a> {
    action: &'static str,
    body: &'a SearchRecord,
}

/// Acknowledgement returned by the batch endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveObjectsResponse {
    #[serde(rename = "taskID", default)]
    pub task_id: Option<i64>,
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Vec<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl IndexClient {
    /// Creates a client for `https://{app_id}.algolia.net`.
    ///
    /// # Errors
    ///
    /// - [`IndexError::InvalidEndpoint`] if the app id does not form a valid host.
    /// - [`IndexError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(
        app_id: &str,
        api_key: &str,
        index_name: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, IndexError> {
        let base_url = format!("https://{}.algolia.net", app_id.trim());
        Self::with_base_url(app_id, api_key, index_name, timeout_secs, user_agent, &base_url)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// - [`IndexError::InvalidEndpoint`] if `base_url` is not a valid URL base.
    /// - [`IndexError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn with_base_url(
        app_id: &str,
        api_key: &str,
        index_name: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, IndexError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let batch_url = Self::batch_url(base_url, index_name)?;

        Ok(Self {
            client,
            app_id: app_id.to_owned(),
            api_key: api_key.to_owned(),
            index_name: index_name.to_owned(),
            batch_url,
        })
    }

    #[must_use]
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// Upserts `records` by `objectID` in one batch call.
    ///
    /// # Errors
    ///
    /// - [`IndexError::Http`] on network failure.
    /// - [`IndexError::UnexpectedStatus`] on any non-2xx status.
    pub async fn save_objects(
        &self,
        records: &[SearchRecord],
    ) -> Result<SaveObjectsResponse, IndexError> {
        let body = BatchRequest {
            requests: records
                .iter()
                .map(|record| BatchOperation {
                    action: "updateObject",
                    body: record,
                })
                .collect(),
        };

        tracing::debug!(
            index = %self.index_name,
            records = records.len(),
            "saving objects"
        );

        let response = self
            .client
            .post(self.batch_url.clone())
            .header(APP_ID_HEADER, &self.app_id)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.message)
                .unwrap_or(text);
            return Err(IndexError::UnexpectedStatus {
                index: self.index_name.clone(),
                status: status.as_u16(),
                message,
            });
        }

        // The acknowledgement is informational; an unexpected shape is not a
        // failed write.
        let text = response.text().await?;
        let ack = serde_json::from_str::<SaveObjectsResponse>(&text).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "unrecognized batch acknowledgement");
            SaveObjectsResponse {
                task_id: None,
                object_ids: Vec::new(),
            }
        });
        Ok(ack)
    }

    /// Builds `{base}/1/indexes/{index}/batch` with the index name
    /// percent-encoded as a single path segment.
    fn batch_url(base_url: &str, index_name: &str) -> Result<Url, IndexError> {
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let mut url = Url::parse(&normalised)
            .map_err(|e| IndexError::InvalidEndpoint(format!("'{base_url}': {e}")))?;
        url.path_segments_mut()
            .map_err(|()| IndexError::InvalidEndpoint(format!("'{base_url}' cannot be a base")))?
            .pop_if_empty()
            .extend(["1", "indexes", index_name, "batch"]);
        Ok(url)
    }
}
