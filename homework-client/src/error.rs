//! Error types for the homework clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the status API or the messaging API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be completed at the network level
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, or a placeholder when it could not be read
        message: String,
    },

    /// Response body is not valid JSON of the expected form
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request could not be built (malformed URL, bad header value)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Messaging API answered but refused the message
    #[error("Message rejected: {0}")]
    Rejected(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Classify a failure returned by `RequestBuilder::send`
    ///
    /// Builder failures never reached the network and are reported as
    /// invalid requests; everything else is a transport failure. The URL is
    /// stripped in both cases since it may carry a bot token.
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::RequestFailed(err)
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err.without_url())
    }
}
