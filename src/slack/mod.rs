//! Slack delivery module
//!
//! Posts built payloads to a Slack channel. Delivery is fire-and-forget:
//! callers hand a message to a [`DeliverySink`] and never see the outcome.

mod client;

pub use client::{SlackClient, SlackConfig, DEFAULT_CHANNEL, SLACK_POST_MESSAGE_URL};

use crate::payload::{Block, MessagePayload};
use async_trait::async_trait;
use thiserror::Error;

/// Message handed to a delivery sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMessage {
    pub text: String,
    pub blocks: Vec<Block>,
    /// Target channel, the sink's default when `None`
    pub channel: Option<String>,
    /// Link previews, off when `None`
    pub unfurl_links: Option<bool>,
}

impl PostMessage {
    /// Plain text message without blocks
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            blocks: Vec::new(),
            channel: None,
            unfurl_links: None,
        }
    }

    /// Send to a specific channel
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }
}

impl From<MessagePayload> for PostMessage {
    fn from(payload: MessagePayload) -> Self {
        Self {
            text: payload.text,
            blocks: payload.blocks,
            channel: None,
            unfurl_links: Some(payload.unfurl_links),
        }
    }
}

/// Slack delivery errors
#[derive(Debug, Error)]
pub enum SlackError {
    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Slack answered with a non-success status
    #[error("Slack API error: {0}")]
    Status(reqwest::StatusCode),
}

/// Accepts messages for delivery
#[async_trait]
pub trait DeliverySink: Send + Sync {
    /// Send a message; failures are handled by the sink
    async fn deliver(&self, message: PostMessage);
}
