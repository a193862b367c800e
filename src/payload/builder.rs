//! Payload builder
//!
//! Turns a coin snapshot into a Slack message: a summary line, an info
//! section with six fields and the coin logo, and, for ranked non-stable
//! coins, a re-hosted price chart.

use super::types::{Accessory, Block, Field, MessagePayload, TextObject};
use crate::chart::{ChartError, ChartResolver, ImageUploader};
use crate::coin::{is_stablecoin, CoinDataProvider, CoinSnapshot};
use crate::format::{format_distance, format_percent, is_flat_change, CurrencyFormatter};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Host that coin logo paths are relative to
pub const DEFAULT_IMAGE_HOST: &str = "https://api.jinx.capital";

/// Coins ranked below this never get a chart
pub const MAX_CHART_RANK: u32 = 1000;

/// Appended to the title when the price is at its all-time high
pub const ATH_MARKER: &str = " 🚀";

/// Placeholder for suppressed values
pub const EMPTY_VALUE: &str = "--";

pub const FIELD_PRICE: &str = "Price";
pub const FIELD_MARKET_CAP: &str = "Market cap";
pub const FIELD_CHANGE_24H: &str = "Change (24h)";
pub const FIELD_CHANGE_7D: &str = "Change (7d)";
pub const FIELD_ATH: &str = "ATH";
pub const FIELD_PULLBACK: &str = "Pullback";

/// Chart collaborators used for enrichment
struct ChartEnrichment {
    resolver: Arc<dyn ChartResolver>,
    uploader: Arc<dyn ImageUploader>,
}

impl ChartEnrichment {
    async fn chart_block(&self, coin: &CoinSnapshot) -> Result<Option<Block>, ChartError> {
        let Some(chart_url) = non_empty(self.resolver.find(coin).await?) else {
            return Ok(None);
        };
        let Some(hosted_url) = non_empty(self.uploader.upload(&chart_url).await?) else {
            return Ok(None);
        };

        let filename = format!("{}-chart.jpg", coin.symbol.to_lowercase());
        Ok(Some(Block::Image {
            title: TextObject::plain(filename.clone()),
            image_url: hosted_url,
            alt_text: filename,
        }))
    }
}

fn non_empty(url: Option<String>) -> Option<String> {
    url.filter(|url| !url.is_empty())
}

/// Builds notification payloads for coin ids
pub struct PayloadBuilder {
    provider: Arc<dyn CoinDataProvider>,
    chart: Option<ChartEnrichment>,
    image_host: String,
}

impl PayloadBuilder {
    /// Create a builder without chart enrichment
    pub fn new(provider: Arc<dyn CoinDataProvider>) -> Self {
        Self {
            provider,
            chart: None,
            image_host: DEFAULT_IMAGE_HOST.to_string(),
        }
    }

    /// Enable chart enrichment
    pub fn with_chart(
        mut self,
        resolver: Arc<dyn ChartResolver>,
        uploader: Arc<dyn ImageUploader>,
    ) -> Self {
        self.chart = Some(ChartEnrichment { resolver, uploader });
        self
    }

    /// Override the host coin logos are served from
    pub fn with_image_host(mut self, image_host: impl Into<String>) -> Self {
        self.image_host = image_host.into();
        self
    }

    /// Build the payload for a coin, `None` when the coin is unknown
    pub async fn build(&self, coin_id: &str) -> anyhow::Result<Option<MessagePayload>> {
        self.build_at(coin_id, Utc::now()).await
    }

    /// Build the payload with relative times measured from `now`
    pub async fn build_at(
        &self,
        coin_id: &str,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Option<MessagePayload>> {
        let Some(coin) = self.provider.get(coin_id).await? else {
            tracing::debug!(coin_id, "No snapshot for coin, skipping payload");
            return Ok(None);
        };

        let mut payload = render_payload(&coin, &self.image_host, now);

        if let Some(block) = self.chart_block(&coin).await {
            payload.blocks.push(block);
        }

        Ok(Some(payload))
    }

    /// Best-effort chart block; every failure yields `None`
    async fn chart_block(&self, coin: &CoinSnapshot) -> Option<Block> {
        let chart = self.chart.as_ref()?;
        if !wants_chart(coin) {
            return None;
        }

        match chart.chart_block(coin).await {
            Ok(block) => block,
            Err(e) => {
                tracing::debug!(symbol = %coin.symbol, error = %e, "Chart enrichment failed");
                None
            }
        }
    }
}

/// Whether a coin qualifies for chart enrichment
pub fn wants_chart(coin: &CoinSnapshot) -> bool {
    let ranked = matches!(coin.rank, Some(rank) if rank > 0 && rank <= MAX_CHART_RANK);
    ranked && !is_stablecoin(&coin.symbol)
}

/// Render the payload for a snapshot without chart enrichment
pub fn render_payload(
    coin: &CoinSnapshot,
    image_host: &str,
    now: DateTime<Utc>,
) -> MessagePayload {
    let price_formatter = CurrencyFormatter::for_price(coin.price, &coin.quote_currency);
    let price = price_formatter.format(coin.price);
    let text = summary_text(coin, &price);

    let fields = vec![
        Field::new(FIELD_PRICE, price.clone()),
        Field::new(FIELD_MARKET_CAP, market_cap_value(coin)),
        Field::new(FIELD_CHANGE_24H, change_value(coin.percentage_change_24h)),
        Field::new(FIELD_CHANGE_7D, change_value(coin.percentage_change_7d)),
        Field::new(FIELD_ATH, ath_value(coin, &price_formatter, &price, now)),
        Field::new(FIELD_PULLBACK, pullback_value(coin, &price_formatter)),
    ];

    let section = Block::Section {
        text: TextObject::mrkdwn(format!("{}\n{}", title(coin), text)),
        fields,
        accessory: Some(Accessory::Image {
            image_url: format!("{}{}", image_host.trim_end_matches('/'), coin.image_url),
            alt_text: format!("{} logo", coin.symbol),
        }),
    };

    MessagePayload {
        text,
        blocks: vec![section],
        unfurl_links: false,
    }
}

fn summary_text(coin: &CoinSnapshot, price: &str) -> String {
    let direction = if coin.percentage_change_24h > Decimal::ZERO {
        "up"
    } else {
        "down"
    };

    format!(
        "{} went {} with {} in the last 24h, 1 {} = {}.",
        coin.name,
        direction,
        format_percent(coin.percentage_change_24h),
        coin.display_symbol(),
        price
    )
}

fn title(coin: &CoinSnapshot) -> String {
    let label = format!("{} ({})", coin.name, coin.display_symbol());
    let label = match coin.website.as_deref() {
        Some(website) if !website.is_empty() => format!("<{}|{}>", website, label),
        _ => label,
    };
    let marker = if coin.is_at_ath { ATH_MARKER } else { "" };
    format!("*{}{}*", label, marker)
}

fn market_cap_value(coin: &CoinSnapshot) -> String {
    match coin.market_cap {
        Some(market_cap) if !market_cap.is_zero() => {
            CurrencyFormatter::market_cap(&coin.quote_currency).format(market_cap)
        }
        _ => EMPTY_VALUE.to_string(),
    }
}

fn change_value(points: Decimal) -> String {
    if is_flat_change(points) {
        EMPTY_VALUE.to_string()
    } else {
        format_percent(points)
    }
}

fn ath_value(
    coin: &CoinSnapshot,
    formatter: &CurrencyFormatter,
    price: &str,
    now: DateTime<Utc>,
) -> String {
    if coin.is_at_ath {
        return price.to_string();
    }
    format!(
        "{} ({} ago)",
        formatter.format(coin.ath),
        format_distance(coin.ath_date, now)
    )
}

fn pullback_value(coin: &CoinSnapshot, formatter: &CurrencyFormatter) -> String {
    if coin.is_at_ath {
        return EMPTY_VALUE.to_string();
    }
    format!(
        "{} ({})",
        formatter.format(-coin.pullback),
        format_percent(-coin.pullback_percentage)
    )
}
