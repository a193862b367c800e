//! Post command implementation

use crate::config::Config;
use crate::notifier::Notifier;
use crate::slack::{SlackClient, SlackConfig};
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct PostArgs {
    /// Coin identifier (e.g., "bitcoin")
    pub coin_id: String,

    /// Slack channel, defaults to the configured channel
    #[arg(long)]
    pub channel: Option<String>,
}

impl PostArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let bot_token = SlackConfig::from_env()
            .map(|slack| slack.bot_token)
            .ok_or_else(|| anyhow::anyhow!("SLACK_BOT_TOKEN is not set"))?;

        let sink = SlackClient::new(config.slack.client_config(bot_token))?;
        let notifier = Notifier::new(super::payload_builder(config)?, Arc::new(sink));

        if !notifier
            .notify(&self.coin_id, self.channel.as_deref())
            .await?
        {
            tracing::warn!(coin_id = %self.coin_id, "Unknown coin, nothing posted");
        }
        Ok(())
    }
}
