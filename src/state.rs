// src/state.rs
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::{
    errors::{NotifyError, NotifyResult},
    services::{
        api_client::{ApiConfig, HttpNotificationApi, MockNotificationApi, NotificationApi},
        sync_service::{NotificationSync, DEFAULT_POLL_INTERVAL},
    },
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    InvalidEnvValue { var: &'static str, value: String },
}

impl From<ConfigError> for NotifyError {
    fn from(err: ConfigError) -> Self {
        NotifyError::ConfigurationError(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the notification service, e.g. `https://studio.example/api`.
    /// When unset the mock API is used instead.
    pub api_base_url: Option<String>,
    pub auth_token: Option<String>,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            auth_token: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let poll_interval = match std::env::var("NOTIFY_POLL_SECS") {
            Ok(raw) => parse_poll_secs(&raw)?,
            Err(_) => DEFAULT_POLL_INTERVAL,
        };

        Ok(Self {
            api_base_url: std::env::var("NOTIFY_API_URL").ok(),
            auth_token: std::env::var("NOTIFY_API_TOKEN").ok(),
            poll_interval,
            ..Default::default()
        })
    }
}

// The poll loop panics on a zero interval, so reject it up front.
fn parse_poll_secs(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidEnvValue {
            var: "NOTIFY_POLL_SECS",
            value: raw.to_string(),
        }),
    }
}

pub struct AppState {
    pub sync: Arc<NotificationSync>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> NotifyResult<Self> {
        let api: Arc<dyn NotificationApi> = match &config.api_base_url {
            Some(base_url) => Arc::new(HttpNotificationApi::new(ApiConfig {
                base_url: base_url.clone(),
                auth_token: config.auth_token.clone(),
                request_timeout: config.request_timeout,
            })?),
            None => {
                tracing::warn!("NOTIFY_API_URL not set, using mock notification API");
                Arc::new(MockNotificationApi::sample())
            }
        };

        Ok(Self {
            sync: Arc::new(NotificationSync::new(api)),
            config,
        })
    }
}
