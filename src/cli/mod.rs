//! CLI interface for coin-notify
//!
//! Provides subcommands for:
//! - `preview`: Build a payload and print it as JSON
//! - `post`: Build a payload and deliver it to Slack
//! - `config`: Show the effective configuration

mod post;
mod preview;

pub use post::PostArgs;
pub use preview::PreviewArgs;

use crate::chart::{ImgurConfig, ImgurUploader, TemplateChartResolver};
use crate::coin::CoinApiClient;
use crate::config::Config;
use crate::payload::PayloadBuilder;
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "coin-notify")]
#[command(about = "Slack market notifications for cryptocurrency assets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a payload and print it
    Preview(PreviewArgs),
    /// Build a payload and post it to Slack
    Post(PostArgs),
    /// Show configuration
    Config,
}

/// Assemble a payload builder from configuration.
///
/// Chart enrichment is enabled only when a chart URL template is configured
/// and `IMGUR_CLIENT_ID` is set.
pub fn payload_builder(config: &Config) -> anyhow::Result<PayloadBuilder> {
    let provider = CoinApiClient::with_config(config.coin_api.client_config())?;
    let builder =
        PayloadBuilder::new(Arc::new(provider)).with_image_host(&config.payload.image_host);

    if !config.chart.enabled {
        tracing::debug!("Chart enrichment disabled");
        return Ok(builder);
    }

    let Some(template) = config.chart.url_template.as_deref() else {
        tracing::info!("No chart URL template configured, charts disabled");
        return Ok(builder);
    };

    let Some(client_id) = ImgurConfig::from_env().map(|imgur| imgur.client_id) else {
        tracing::info!("IMGUR_CLIENT_ID not set, charts disabled");
        return Ok(builder);
    };

    let resolver = TemplateChartResolver::new(template, config.chart.timeout())?;
    let uploader = ImgurUploader::new(config.chart.imgur_config(client_id))?;

    Ok(builder.with_chart(Arc::new(resolver), Arc::new(uploader)))
}
