//! Homework status API client

use std::fmt;

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::{decode_json, ensure_success};

/// HTTP client for the homework status API
#[derive(Clone)]
pub struct PracticumClient {
    /// Full status endpoint URL
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new status API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework status endpoint
    /// * `token` - OAuth token of the tracked account
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new status API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the status endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// Returns the decoded body as-is; structural validation is up to the
    /// caller.
    ///
    /// # Errors
    /// * [`ClientError::RequestFailed`] - the request could not complete
    /// * [`ClientError::ApiError`] - the API answered with a non-2xx status
    /// * [`ClientError::ParseError`] - the body is not JSON
    /// * [`ClientError::InvalidRequest`] - the request could not be built
    pub async fn fetch_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("Fetching homework statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let response = ensure_success(response).await?;
        decode_json(response).await
    }
}

impl fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}
