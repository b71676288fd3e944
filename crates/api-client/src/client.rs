use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use tripdeck_core::Notification;

/// Failure modes of a notification read. All of them are recoverable: the
/// shell logs the error and keeps its current feed.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Typed HTTP client for the TripDeck notification endpoint.
///
/// Reads are authenticated with a public anonymous key carried as a bearer
/// credential and scoped to a traveler id via the `userId` query parameter.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl ApiClient {
    /// Create a new client with the given base URL, anonymous key and timeout.
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Create from an existing `reqwest::Client` (e.g. shared in tests).
    pub fn with_client(client: reqwest::Client, base_url: &str, anon_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Fetch the full notification feed for one traveler.
    ///
    /// A 2xx response with a JSON array is the only success shape; the
    /// caller replaces its collection wholesale with the result.
    pub async fn list_notifications(&self, user_id: &str) -> Result<Vec<Notification>, ApiError> {
        let resp = self
            .client
            .get(self.url("/notifications"))
            .query(&[("userId", user_id)])
            .bearer_auth(&self.anon_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let body = resp.text().await?;
        let feed: Vec<Notification> = serde_json::from_str(&body)?;
        debug!(user_id, count = feed.len(), "notification feed fetched");
        Ok(feed)
    }
}
