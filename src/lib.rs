//! coin-notify: Slack market notifications for cryptocurrency assets
//!
//! This library provides the core components for:
//! - Coin snapshot retrieval from the coin data API
//! - Price, market cap and percentage formatting
//! - Slack Block Kit payload construction
//! - Best-effort chart enrichment via Imgur
//! - Fire-and-forget Slack delivery

pub mod chart;
pub mod cli;
pub mod coin;
pub mod config;
pub mod format;
pub mod notifier;
pub mod payload;
pub mod slack;
pub mod telemetry;
