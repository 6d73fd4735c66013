//! Bot configuration
//!
//! Defines all configurable parameters for the bot: credentials for the
//! status API and the messaging API, the destination chat, endpoints and the
//! polling interval.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Default homework status endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Telegram Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Configuration errors; any of them stops the process before polling starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the homework status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Homework status endpoint URL
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between the end of one poll cycle and the start of the next
    pub retry_interval: Duration,

    /// Timeout applied to every outbound HTTP request
    pub request_timeout: Duration,

    /// Initial cursor; `None` starts from the current time
    pub from_date: Option<i64>,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(practicum_token: String, telegram_token: String, telegram_chat_id: String) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            retry_interval: Duration::from_secs(600),
            request_timeout: Duration::from_secs(30),
            from_date: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional)
    /// - RETRY_TIME (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    /// - FROM_DATE (optional, unix timestamp, default: now)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup
    ///
    /// Empty values count as unset. All missing required variables are
    /// reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut missing = Vec::new();
        let mut required = |key: &'static str| {
            get(key).unwrap_or_else(|| {
                missing.push(key);
                String::new()
            })
        };

        let practicum_token = required("PRACTICUM_TOKEN");
        let telegram_token = required("TELEGRAM_TOKEN");
        let telegram_chat_id = required("TELEGRAM_CHAT_ID");

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let mut config = Self::new(practicum_token, telegram_token, telegram_chat_id);

        if let Some(endpoint) = get("PRACTICUM_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Some(url) = get("TELEGRAM_API_URL") {
            config.telegram_api_url = url;
        }

        if let Some(secs) = get("RETRY_TIME").and_then(|s| s.parse::<u64>().ok()) {
            config.retry_interval = Duration::from_secs(secs);
        }

        if let Some(secs) = get("REQUEST_TIMEOUT").and_then(|s| s.parse::<u64>().ok()) {
            config.request_timeout = Duration::from_secs(secs);
        }

        config.from_date = get("FROM_DATE").and_then(|s| s.parse::<i64>().ok());

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        if self.retry_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "retry_interval must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_interval", &self.retry_interval)
            .field("request_timeout", &self.request_timeout)
            .field("from_date", &self.from_date)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    const SECRETS: [(&str, &str); 3] = [
        ("PRACTICUM_TOKEN", "p-token"),
        ("TELEGRAM_TOKEN", "t-token"),
        ("TELEGRAM_CHAT_ID", "12345"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&SECRETS)).unwrap();
        assert_eq!(config.retry_interval, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert_eq!(config.from_date, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_all_missing_secrets_are_reported() {
        let err = Config::from_lookup(lookup(&[("TELEGRAM_TOKEN", "t-token")])).unwrap_err();
        match err {
            ConfigError::Missing(keys) => {
                assert_eq!(keys, vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_secret_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "  "),
            ("TELEGRAM_CHAT_ID", "12345"),
        ]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required environment variables: TELEGRAM_TOKEN"
        );
    }

    #[test]
    fn test_optional_overrides() {
        let mut vars = SECRETS.to_vec();
        vars.extend([
            ("PRACTICUM_ENDPOINT", "http://localhost:9000/statuses/"),
            ("RETRY_TIME", "30"),
            ("REQUEST_TIMEOUT", "5"),
            ("FROM_DATE", "1700000000"),
        ]);

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.endpoint, "http://localhost:9000/statuses/");
        assert_eq!(config.retry_interval, Duration::from_secs(30));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.from_date, Some(1_700_000_000));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::from_lookup(lookup(&SECRETS)).unwrap();

        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.endpoint = DEFAULT_ENDPOINT.to_string();

        config.retry_interval = Duration::ZERO;
        assert!(config.validate().is_err());
        config.retry_interval = Duration::from_secs(1);

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let config = Config::from_lookup(lookup(&SECRETS)).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("p-token"));
        assert!(!debug.contains("t-token"));
        assert!(debug.contains("12345"));
    }
}
