//! Slack Web API client for `chat.postMessage`

use super::{DeliverySink, PostMessage, SlackError};
use crate::payload::Block;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Slack message post endpoint
pub const SLACK_POST_MESSAGE_URL: &str = "https://slack.com/api/chat.postMessage";

/// Channel used when a message does not name one
pub const DEFAULT_CHANNEL: &str = "dev";

/// Slack client settings
#[derive(Debug, Clone)]
pub struct SlackConfig {
    /// Message post endpoint
    pub api_url: String,
    /// Bot token sent as a bearer credential
    pub bot_token: String,
    /// Fallback channel
    pub default_channel: String,
    /// Request timeout
    pub timeout: Duration,
}

impl SlackConfig {
    /// Create settings with the default endpoint and channel
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            api_url: SLACK_POST_MESSAGE_URL.to_string(),
            bot_token: bot_token.into(),
            default_channel: DEFAULT_CHANNEL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Read the bot token from `SLACK_BOT_TOKEN`
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("SLACK_BOT_TOKEN").ok()?;
        Some(Self::new(bot_token))
    }
}

/// Wire body of a `chat.postMessage` call
#[derive(Debug, Serialize)]
struct PostMessageBody<'a> {
    channel: &'a str,
    text: &'a str,
    blocks: &'a [Block],
    unfurl_links: bool,
}

/// Posts messages to Slack
pub struct SlackClient {
    config: SlackConfig,
    client: Client,
}

impl SlackClient {
    pub fn new(config: SlackConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn body<'a>(&'a self, message: &'a PostMessage) -> PostMessageBody<'a> {
        PostMessageBody {
            channel: message
                .channel
                .as_deref()
                .filter(|channel| !channel.is_empty())
                .unwrap_or(self.config.default_channel.as_str()),
            text: &message.text,
            blocks: &message.blocks,
            unfurl_links: message.unfurl_links.unwrap_or(false),
        }
    }

    /// Send a message, reporting transport and HTTP status failures.
    ///
    /// The response body is not inspected.
    pub async fn post(&self, message: &PostMessage) -> Result<(), SlackError> {
        let body = self.body(message);

        tracing::debug!(
            channel = body.channel,
            blocks = body.blocks.len(),
            "Posting Slack message"
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.bot_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SlackError::Status(response.status()));
        }

        Ok(())
    }
}

#[async_trait]
impl DeliverySink for SlackClient {
    async fn deliver(&self, message: PostMessage) {
        if let Err(e) = self.post(&message).await {
            tracing::warn!(error = %e, "Failed to deliver Slack message");
        }
    }
}
