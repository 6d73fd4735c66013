//! Homework HTTP Clients
//!
//! Thin, typed HTTP clients for the two remote services the bot talks to:
//! - [`PracticumClient`]: the homework status API (`GET` with `from_date`)
//! - [`TelegramClient`]: the Telegram Bot API `sendMessage` method
//!
//! Both return [`ClientError`] so callers can tell transport failures,
//! non-success statuses and undecodable bodies apart without string matching.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> homework_client::Result<()> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "token",
//!     );
//!
//!     let body = client.fetch_statuses(0).await?;
//!     println!("{}", body);
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

pub use error::{ClientError, Result};
pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

/// Turns a non-success response into an API error, passing successes through
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    Ok(response)
}

/// Reads the whole body and decodes it as JSON
///
/// A body that cannot be read is a transport failure; a body that is read but
/// cannot be decoded is a parse failure.
async fn decode_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response.bytes().await?;

    serde_json::from_slice(&body)
        .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
}
