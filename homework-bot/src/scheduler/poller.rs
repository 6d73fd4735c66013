//! Homework status poller
//!
//! Runs the fetch, validate, diff, notify cycle forever, pausing for a fixed
//! interval after every cycle whatever its outcome.

use std::sync::Arc;
use std::time::Duration;

use homework_client::ClientError;
use homework_core::{PollState, ShapeError, translate, validate};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::service::{HomeworkSource, Notifier};

/// Reason a whole cycle was abandoned
///
/// Every variant leaves the poll state untouched; the next cycle retries from
/// the same cursor.
#[derive(Debug, Error)]
pub enum CycleError {
    /// Transport failure, non-success status or undecodable body
    #[error("failed to fetch homework statuses: {0}")]
    Fetch(ClientError),

    /// Decoded body has the wrong shape
    #[error("invalid status API response: {0}")]
    Shape(#[from] ShapeError),

    /// Anything outside the classified fetch and validation failures
    #[error("unexpected failure: {0:#}")]
    Internal(anyhow::Error),
}

impl From<ClientError> for CycleError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::RequestFailed(_)
            | ClientError::ApiError { .. }
            | ClientError::ParseError(_) => Self::Fetch(err),
            ClientError::InvalidRequest(_) | ClientError::Rejected(_) => {
                Self::Internal(anyhow::Error::new(err))
            }
        }
    }
}

/// Summary of one successful cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Work items in the response
    pub items: usize,
    /// Items whose status differed from the last recorded one
    pub changed: usize,
    /// Notifications delivered
    pub sent: usize,
    /// Changed items that could not be translated
    pub skipped: usize,
    /// Cursor after the cycle
    pub cursor: i64,
}

/// Poller that tracks one account's homework statuses
pub struct StatusPoller {
    source: Arc<dyn HomeworkSource>,
    notifier: Arc<dyn Notifier>,
    retry_interval: Duration,
    state: PollState,
}

impl StatusPoller {
    /// Creates a new poller starting at `cursor` with no known statuses
    pub fn new(
        source: Arc<dyn HomeworkSource>,
        notifier: Arc<dyn Notifier>,
        retry_interval: Duration,
        cursor: i64,
    ) -> Self {
        Self {
            source,
            notifier,
            retry_interval,
            state: PollState::new(cursor),
        }
    }

    /// Current poll state
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Runs the polling loop until the process is terminated
    pub async fn run(mut self) {
        info!(
            "Starting status poller (interval: {:?}, cursor: {})",
            self.retry_interval,
            self.state().cursor
        );

        loop {
            self.cycle().await;

            debug!("Sleeping for {:?}", self.retry_interval);
            tokio::time::sleep(self.retry_interval).await;
        }
    }

    /// Runs one cycle and handles its failure, if any
    ///
    /// Classified failures are only logged. Unexpected ones are also reported
    /// through the notifier.
    pub async fn cycle(&mut self) {
        match self.poll_once().await {
            Ok(report) if report.sent > 0 || report.skipped > 0 => {
                info!(
                    "Cycle done: {} item(s), {} changed, {} sent, {} skipped, cursor {}",
                    report.items, report.changed, report.sent, report.skipped, report.cursor
                );
            }
            Ok(report) => {
                debug!("No status changes, cursor {}", report.cursor);
            }
            Err(e @ CycleError::Internal(_)) => {
                error!("Poll cycle failed: {}", e);
                self.deliver(&e.to_string()).await;
            }
            Err(e) => {
                error!("Poll cycle failed: {}", e);
            }
        }
    }

    /// Performs a single fetch, validate, diff, notify pass
    ///
    /// On error nothing is notified and the state is left as it was.
    pub async fn poll_once(&mut self) -> Result<CycleReport, CycleError> {
        let raw = self.source.fetch(self.state.cursor).await?;
        let response = validate(&raw)?;

        let changed = self.state.diff(&response.work_items);
        let mut report = CycleReport {
            items: response.work_items.len(),
            changed: changed.len(),
            sent: 0,
            skipped: 0,
            cursor: self.state.cursor,
        };

        debug!("{} of {} item(s) changed", report.changed, report.items);

        for item in changed {
            match translate(item) {
                Ok(message) => {
                    if self.deliver(&message).await {
                        report.sent += 1;
                    }
                }
                Err(e) => {
                    error!("Skipping work item {}: {}", item, e);
                    report.skipped += 1;
                }
            }
        }

        self.state.commit(&response);
        report.cursor = self.state.cursor;

        Ok(report)
    }

    /// Sends one message, logging the outcome; never fails
    async fn deliver(&self, message: &str) -> bool {
        match self.notifier.notify(message).await {
            Ok(()) => {
                info!("Message sent: {}", message);
                true
            }
            Err(e) => {
                error!("Failed to send message {:?}: {}", message, e);
                false
            }
        }
    }
}
