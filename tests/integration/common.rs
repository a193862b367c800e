//! Shared fixtures for integration tests

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use coin_notify::chart::{ChartError, ChartResolver, ImageUploader};
use coin_notify::coin::{CoinDataProvider, CoinSnapshot};
use coin_notify::slack::{DeliverySink, PostMessage};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use tokio::sync::Mutex;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

pub fn snapshot(symbol: &str, price: Decimal) -> CoinSnapshot {
    CoinSnapshot {
        symbol: symbol.to_string(),
        name: symbol.to_uppercase(),
        website: None,
        image_url: format!("/images/{}.png", symbol),
        price,
        quote_currency: "USD".to_string(),
        market_cap: Some(dec!(1500000000)),
        percentage_change_24h: dec!(1.5),
        percentage_change_7d: dec!(-7.25),
        rank: Some(10),
        ath: price * dec!(2),
        ath_date: fixed_now() - Duration::days(3),
        is_at_ath: false,
        pullback: price,
        pullback_percentage: dec!(50),
    }
}

/// Provider backed by a fixed map of coin id to snapshot
#[derive(Default)]
pub struct MapProvider {
    coins: HashMap<String, CoinSnapshot>,
}

impl MapProvider {
    pub fn with(mut self, id: &str, coin: CoinSnapshot) -> Self {
        self.coins.insert(id.to_string(), coin);
        self
    }
}

#[async_trait]
impl CoinDataProvider for MapProvider {
    async fn get(&self, coin_id: &str) -> anyhow::Result<Option<CoinSnapshot>> {
        Ok(self.coins.get(coin_id).cloned())
    }
}

/// Resolver that builds a chart URL from the symbol
pub struct SymbolChartResolver;

#[async_trait]
impl ChartResolver for SymbolChartResolver {
    async fn find(&self, coin: &CoinSnapshot) -> Result<Option<String>, ChartError> {
        Ok(Some(format!(
            "https://charts.test/{}usdt.jpg",
            coin.symbol.to_lowercase()
        )))
    }
}

/// Uploader that "hosts" images under a fixed prefix
pub struct PrefixUploader;

#[async_trait]
impl ImageUploader for PrefixUploader {
    async fn upload(&self, url: &str) -> Result<Option<String>, ChartError> {
        let name = url.rsplit('/').next().unwrap_or_default();
        Ok(Some(format!("https://i.imgur.test/{}", name)))
    }
}

/// Uploader that always fails
pub struct BrokenUploader;

#[async_trait]
impl ImageUploader for BrokenUploader {
    async fn upload(&self, _url: &str) -> Result<Option<String>, ChartError> {
        Err(ChartError::UploadRejected)
    }
}

/// Sink that records delivered messages
#[derive(Default)]
pub struct RecordingSink {
    pub messages: Mutex<Vec<PostMessage>>,
}

#[async_trait]
impl DeliverySink for RecordingSink {
    async fn deliver(&self, message: PostMessage) {
        self.messages.lock().await.push(message);
    }
}
