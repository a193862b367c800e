//! Coin snapshot types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time market data for a single asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinSnapshot {
    /// Ticker (e.g., "btc"), compared case-insensitively
    pub symbol: String,
    /// Display name (e.g., "Bitcoin")
    pub name: String,
    /// Project website
    #[serde(default)]
    pub website: Option<String>,
    /// Logo path, relative to the image host
    pub image_url: String,
    /// Current price in `quote_currency`
    pub price: Decimal,
    /// Currency code the prices are quoted in (e.g., "USD")
    pub quote_currency: String,
    /// Market capitalisation in `quote_currency`
    #[serde(default)]
    pub market_cap: Option<Decimal>,
    /// 24h change in percentage points
    #[serde(rename = "percentageChange24h")]
    pub percentage_change_24h: Decimal,
    /// 7d change in percentage points
    #[serde(rename = "percentageChange7d")]
    pub percentage_change_7d: Decimal,
    /// Market cap rank, absent when unranked
    #[serde(default)]
    pub rank: Option<u32>,
    /// All-time-high price
    pub ath: Decimal,
    /// When the all-time high was set
    #[serde(with = "chrono::serde::ts_seconds")]
    pub ath_date: DateTime<Utc>,
    /// Whether the current price is the all-time high
    pub is_at_ath: bool,
    /// Distance below the all-time high
    pub pullback: Decimal,
    /// Distance below the all-time high in percentage points
    pub pullback_percentage: Decimal,
}

impl CoinSnapshot {
    /// Ticker in upper case, as shown in titles and summaries
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }
}
