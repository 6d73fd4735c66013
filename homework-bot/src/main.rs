//! Homework Bot
//!
//! A long-running poller that watches one account's homework review statuses
//! and forwards every change to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and tuning loaded from the environment once
//! - Services: status source and notifier behind traits
//! - Scheduler: the fixed-interval poll loop that owns all state
//!
//! Missing configuration is the only reason the process exits on its own;
//! every other failure is logged and retried on the next cycle.

mod config;
mod logging;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::scheduler::StatusPoller;
use crate::service::{HomeworkSource, Notifier, TelegramNotifier};
use homework_client::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let log_file = std::env::var_os("LOG_FILE").map(PathBuf::from);
    let guard = logging::init(log_file.as_deref())?;

    info!("Starting homework bot");

    // Load configuration
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Fatal configuration error: {:#}", e);
            drop(guard);
            std::process::exit(1);
        }
    };
    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.endpoint, config.telegram_chat_id
    );

    // Initialize clients
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let source: Arc<dyn HomeworkSource> = Arc::new(PracticumClient::with_client(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        http.clone(),
    ));

    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(
        TelegramClient::with_client(
            config.telegram_api_url.clone(),
            config.telegram_token.clone(),
            http,
        ),
        config.telegram_chat_id.clone(),
    ));

    info!("Clients initialized");

    let cursor = config
        .from_date
        .unwrap_or_else(|| chrono::Utc::now().timestamp());

    // Start polling loop
    let poller = StatusPoller::new(source, notifier, config.retry_interval, cursor);
    poller.run().await;

    Ok(())
}

/// Loads and validates configuration from environment variables
fn load_config() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
