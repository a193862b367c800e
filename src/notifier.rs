//! Build-then-deliver glue between the payload builder and a delivery sink

use crate::payload::PayloadBuilder;
use crate::slack::{DeliverySink, PostMessage};
use std::sync::Arc;

/// Posts coin notifications
pub struct Notifier {
    builder: PayloadBuilder,
    sink: Arc<dyn DeliverySink>,
}

impl Notifier {
    pub fn new(builder: PayloadBuilder, sink: Arc<dyn DeliverySink>) -> Self {
        Self { builder, sink }
    }

    /// Build and deliver the notification for a coin.
    ///
    /// Returns `false` without touching the sink when the coin is unknown.
    pub async fn notify(&self, coin_id: &str, channel: Option<&str>) -> anyhow::Result<bool> {
        let Some(payload) = self.builder.build(coin_id).await? else {
            tracing::info!(coin_id, "Unknown coin, nothing to deliver");
            return Ok(false);
        };

        let mut message = PostMessage::from(payload);
        if let Some(channel) = channel {
            message = message.with_channel(channel);
        }

        tracing::info!(coin_id, channel = ?message.channel, "Delivering coin notification");
        self.sink.deliver(message).await;
        Ok(true)
    }
}
