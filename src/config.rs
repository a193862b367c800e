//! Configuration types for coin-notify
//!
//! Non-secret settings come from a TOML file; credentials are read from the
//! environment by the collaborator that needs them.

use crate::chart::{ImgurConfig, IMGUR_UPLOAD_URL};
use crate::coin::{CoinApiConfig, COIN_API_URL};
use crate::payload::DEFAULT_IMAGE_HOST;
use crate::slack::{SlackConfig, DEFAULT_CHANNEL, SLACK_POST_MESSAGE_URL};
use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub coin_api: CoinApiSettings,
    #[serde(default)]
    pub slack: SlackSettings,
    #[serde(default)]
    pub chart: ChartSettings,
    #[serde(default)]
    pub payload: PayloadSettings,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Coin data API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoinApiSettings {
    #[serde(default = "default_coin_api_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Slack delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlackSettings {
    #[serde(default = "default_slack_api_url")]
    pub api_url: String,
    /// Channel used when a post does not name one
    #[serde(default = "default_channel")]
    pub default_channel: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Chart enrichment configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChartSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Chart URL template with `{symbol}` and optional `{quote}` placeholders
    #[serde(default)]
    pub url_template: Option<String>,
    #[serde(default = "default_imgur_upload_url")]
    pub upload_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Payload rendering configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PayloadSettings {
    /// Host coin logo paths are appended to
    #[serde(default = "default_image_host")]
    pub image_host: String,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_true() -> bool {
    true
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_coin_api_url() -> String {
    COIN_API_URL.to_string()
}
fn default_slack_api_url() -> String {
    SLACK_POST_MESSAGE_URL.to_string()
}
fn default_channel() -> String {
    DEFAULT_CHANNEL.to_string()
}
fn default_imgur_upload_url() -> String {
    IMGUR_UPLOAD_URL.to_string()
}
fn default_image_host() -> String {
    DEFAULT_IMAGE_HOST.to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CoinApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_coin_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SlackSettings {
    fn default() -> Self {
        Self {
            api_url: default_slack_api_url(),
            default_channel: default_channel(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            url_template: None,
            upload_url: default_imgur_upload_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for PayloadSettings {
    fn default() -> Self {
        Self {
            image_host: default_image_host(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl CoinApiSettings {
    pub fn client_config(&self) -> CoinApiConfig {
        CoinApiConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl SlackSettings {
    /// Client settings for the given bot token
    pub fn client_config(&self, bot_token: impl Into<String>) -> SlackConfig {
        SlackConfig {
            api_url: self.api_url.clone(),
            bot_token: bot_token.into(),
            default_channel: self.default_channel.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

impl ChartSettings {
    /// Uploader settings for the given Imgur client id
    pub fn imgur_config(&self, client_id: impl Into<String>) -> ImgurConfig {
        ImgurConfig {
            upload_url: self.upload_url.clone(),
            client_id: client_id.into(),
            timeout: self.timeout(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
