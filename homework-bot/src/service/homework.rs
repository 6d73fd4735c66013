//! Homework status source
//!
//! Wraps the status API client behind a trait so the poller never depends on
//! HTTP directly.

use async_trait::async_trait;
use homework_client::{ClientError, PracticumClient};
use serde_json::Value;

/// Source of raw homework status responses
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetches statuses changed since `cursor`
    ///
    /// Returns the decoded body without any structural checks.
    async fn fetch(&self, cursor: i64) -> Result<Value, ClientError>;
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, cursor: i64) -> Result<Value, ClientError> {
        self.fetch_statuses(cursor).await
    }
}
