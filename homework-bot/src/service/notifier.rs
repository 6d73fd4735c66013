//! Notification delivery
//!
//! Sends text messages to the single configured destination. Delivery is
//! attempted exactly once per call; failures are returned to the caller and
//! never retried here.

use async_trait::async_trait;
use homework_client::{ClientError, TelegramClient};

/// Delivers a text message to a fixed destination
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `message`
    async fn notify(&self, message: &str) -> Result<(), ClientError>;
}

/// Notifier posting to one Telegram chat
pub struct TelegramNotifier {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a notifier bound to `chat_id`
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> Result<(), ClientError> {
        self.client.send_message(&self.chat_id, message).await
    }
}
