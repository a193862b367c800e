//! Chart lookup against a URL template

use super::{ChartError, ChartResolver};
use crate::coin::CoinSnapshot;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Quote assets tried in order when looking for a chart
pub const USD_PEGGED_QUOTES: [&str; 4] = ["usdt", "usdc", "busd", "usd"];

/// Probes chart URLs built from a template such as
/// `https://charts.example.com/{symbol}{quote}.jpg`.
///
/// `{symbol}` is replaced by the lowercase ticker and `{quote}` by each of
/// [`USD_PEGGED_QUOTES`]; the first URL answering a HEAD request with a
/// success status wins.
pub struct TemplateChartResolver {
    template: String,
    client: Client,
}

impl TemplateChartResolver {
    /// Create a resolver for the given URL template
    pub fn new(template: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let template = template.into();
        if !template.contains("{symbol}") {
            anyhow::bail!("Chart URL template must contain {{symbol}}: {}", template);
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { template, client })
    }

    /// Candidate chart URLs for a ticker, in probe order
    pub fn candidate_urls(&self, symbol: &str) -> Vec<String> {
        let symbol = symbol.to_lowercase();
        let with_symbol = self.template.replace("{symbol}", &symbol);

        if !with_symbol.contains("{quote}") {
            return vec![with_symbol];
        }

        USD_PEGGED_QUOTES
            .iter()
            .map(|quote| with_symbol.replace("{quote}", quote))
            .collect()
    }
}

#[async_trait]
impl ChartResolver for TemplateChartResolver {
    async fn find(&self, coin: &CoinSnapshot) -> Result<Option<String>, ChartError> {
        for url in self.candidate_urls(&coin.symbol) {
            let response = self.client.head(&url).send().await?;

            if response.status().is_success() {
                tracing::debug!(symbol = %coin.symbol, url = %url, "Found chart");
                return Ok(Some(url));
            }

            tracing::trace!(url = %url, status = %response.status(), "No chart at candidate");
        }

        Ok(None)
    }
}
