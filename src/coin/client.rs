//! HTTP client for the coin data API

use super::{CoinDataProvider, CoinSnapshot};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Coin data API base URL
pub const COIN_API_URL: &str = "https://api.jinx.capital";

/// Configuration for the coin API client
#[derive(Debug, Clone)]
pub struct CoinApiConfig {
    /// Base URL for the coin API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for CoinApiConfig {
    fn default() -> Self {
        Self {
            base_url: COIN_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Fetches coin snapshots over HTTP
pub struct CoinApiClient {
    config: CoinApiConfig,
    client: Client,
}

impl CoinApiClient {
    /// Create a new client with default configuration
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(CoinApiConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: CoinApiConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn coin_url(&self, coin_id: &str) -> String {
        format!(
            "{}/coins/{}",
            self.config.base_url.trim_end_matches('/'),
            coin_id
        )
    }
}

#[async_trait]
impl CoinDataProvider for CoinApiClient {
    async fn get(&self, coin_id: &str) -> anyhow::Result<Option<CoinSnapshot>> {
        let url = self.coin_url(coin_id);

        tracing::debug!(url = %url, coin_id, "Fetching coin snapshot");

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(coin_id, "Coin not found");
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Coin API error: {} - {}", status, body);
        }

        let coin: CoinSnapshot = response.json().await?;
        Ok(Some(coin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_api_config_default() {
        let config = CoinApiConfig::default();
        assert_eq!(config.base_url, COIN_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_coin_url() {
        let client = CoinApiClient::with_config(CoinApiConfig {
            base_url: "https://coins.test/".to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        assert_eq!(client.coin_url("bitcoin"), "https://coins.test/coins/bitcoin");
    }
}
