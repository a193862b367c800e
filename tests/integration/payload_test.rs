//! Integration tests for payload building

use crate::common::{
    fixed_now, snapshot, BrokenUploader, MapProvider, PrefixUploader, SymbolChartResolver,
};
use coin_notify::payload::{
    Block, PayloadBuilder, FIELD_ATH, FIELD_CHANGE_7D, FIELD_PRICE, FIELD_PULLBACK,
};
use rust_decimal_macros::dec;
use serde_json::json;
use std::sync::Arc;

fn builder(provider: MapProvider) -> PayloadBuilder {
    PayloadBuilder::new(Arc::new(provider))
        .with_chart(Arc::new(SymbolChartResolver), Arc::new(PrefixUploader))
}

#[tokio::test]
async fn test_price_boundary_at_compact_threshold() {
    let provider = MapProvider::default()
        .with("at", snapshot("aaa", dec!(10000)))
        .with("below", snapshot("bbb", dec!(9999.99)));
    let builder = builder(provider);

    let at = builder.build_at("at", fixed_now()).await.unwrap().unwrap();
    assert_eq!(at.field(FIELD_PRICE), Some("$10K"));

    let below = builder.build_at("below", fixed_now()).await.unwrap().unwrap();
    assert_eq!(below.field(FIELD_PRICE), Some("$10,000"));
}

#[tokio::test]
async fn test_price_boundaries_at_hundred_and_thousand() {
    let provider = MapProvider::default()
        .with("hundred", snapshot("h", dec!(100.005)))
        .with("thousand", snapshot("t", dec!(1000)));
    let builder = builder(provider);

    let hundred = builder.build_at("hundred", fixed_now()).await.unwrap().unwrap();
    assert_eq!(hundred.field(FIELD_PRICE), Some("$100"));

    let thousand = builder.build_at("thousand", fixed_now()).await.unwrap().unwrap();
    assert_eq!(thousand.field(FIELD_PRICE), Some("$1,000"));
    assert_eq!(thousand.field(FIELD_ATH), Some("$2,000 (3 days ago)"));
    assert_eq!(thousand.field(FIELD_PULLBACK), Some("-$1,000 (-50.00%)"));
}

#[tokio::test]
async fn test_full_payload_json_shape() {
    let mut coin = snapshot("link", dec!(14.237));
    coin.name = "Chainlink".to_string();
    coin.website = Some("https://chain.link".to_string());

    let builder = builder(MapProvider::default().with("chainlink", coin));
    let payload = builder.build_at("chainlink", fixed_now()).await.unwrap().unwrap();
    let value = serde_json::to_value(&payload).unwrap();

    let summary = "Chainlink went up with +1.50% in the last 24h, 1 LINK = $14.24.";
    assert_eq!(
        value,
        json!({
            "text": summary,
            "blocks": [
                {
                    "type": "section",
                    "text": {
                        "type": "mrkdwn",
                        "text": format!("*<https://chain.link|Chainlink (LINK)>*\n{}", summary)
                    },
                    "fields": [
                        {"type": "mrkdwn", "text": "*Price*\n$14.24"},
                        {"type": "mrkdwn", "text": "*Market cap*\n$1.5B"},
                        {"type": "mrkdwn", "text": "*Change (24h)*\n+1.50%"},
                        {"type": "mrkdwn", "text": "*Change (7d)*\n-7.25%"},
                        {"type": "mrkdwn", "text": "*ATH*\n$28.47 (3 days ago)"},
                        {"type": "mrkdwn", "text": "*Pullback*\n-$14.24 (-50.00%)"}
                    ],
                    "accessory": {
                        "type": "image",
                        "image_url": "https://api.jinx.capital/images/link.png",
                        "alt_text": "link logo"
                    }
                },
                {
                    "type": "image",
                    "title": {"type": "plain_text", "text": "link-chart.jpg"},
                    "image_url": "https://i.imgur.test/linkusdt.jpg",
                    "alt_text": "link-chart.jpg"
                }
            ],
            "unfurl_links": false
        })
    );
}

#[tokio::test]
async fn test_block_counts_across_coins() {
    let mut stable = snapshot("usdt", dec!(1.0001));
    stable.rank = Some(3);
    let mut unranked = snapshot("new", dec!(0.004));
    unranked.rank = None;

    let provider = MapProvider::default()
        .with("stable", stable)
        .with("unranked", unranked)
        .with("ranked", snapshot("eth", dec!(3500)));
    let builder = builder(provider);

    for (id, expected_blocks) in [("stable", 1), ("unranked", 1), ("ranked", 2)] {
        let payload = builder.build_at(id, fixed_now()).await.unwrap().unwrap();
        assert_eq!(payload.blocks.len(), expected_blocks, "coin {}", id);
        assert_eq!(payload.blocks.iter().filter(|b| b.is_section()).count(), 1);
        assert!(matches!(payload.blocks[0], Block::Section { .. }));
    }
}

#[tokio::test]
async fn test_failed_upload_keeps_base_payload() {
    let provider = MapProvider::default().with("eth", snapshot("eth", dec!(3500)));
    let builder = PayloadBuilder::new(Arc::new(provider))
        .with_chart(Arc::new(SymbolChartResolver), Arc::new(BrokenUploader));

    let payload = builder.build_at("eth", fixed_now()).await.unwrap().unwrap();
    assert_eq!(payload.blocks.len(), 1);
    assert_eq!(payload.field(FIELD_CHANGE_7D), Some("-7.25%"));
}

#[tokio::test]
async fn test_unknown_coin_yields_nothing() {
    let builder = builder(MapProvider::default());
    assert!(builder.build("missing").await.unwrap().is_none());
}
