//! Coin data module
//!
//! Snapshot types and the provider seam the payload builder reads from

mod client;
mod types;

pub use client::{CoinApiClient, CoinApiConfig, COIN_API_URL};
pub use types::CoinSnapshot;

use async_trait::async_trait;

/// Assets pegged to a fixed reference value
pub const STABLECOINS: &[&str] = &[
    "USDT", "USDC", "BUSD", "DAI", "TUSD", "USDP", "GUSD", "UST", "USTC", "FRAX", "LUSD", "USDD",
    "FDUSD", "PYUSD", "USDE", "SUSD", "EURS", "EURT",
];

/// Check whether a ticker is a stable-value asset
pub fn is_stablecoin(symbol: &str) -> bool {
    STABLECOINS
        .iter()
        .any(|stable| stable.eq_ignore_ascii_case(symbol))
}

/// Source of coin snapshots
#[async_trait]
pub trait CoinDataProvider: Send + Sync {
    /// Fetch the current snapshot, `None` when the id is unknown
    async fn get(&self, coin_id: &str) -> anyhow::Result<Option<CoinSnapshot>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_stablecoin_case_insensitive() {
        assert!(is_stablecoin("USDT"));
        assert!(is_stablecoin("usdc"));
        assert!(is_stablecoin("Dai"));
        assert!(!is_stablecoin("BTC"));
        assert!(!is_stablecoin("usd"));
    }
}
