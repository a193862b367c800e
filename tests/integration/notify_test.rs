//! Integration tests for build-then-deliver

use crate::common::{snapshot, MapProvider, RecordingSink};
use coin_notify::notifier::Notifier;
use coin_notify::payload::PayloadBuilder;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn notifier(sink: Arc<RecordingSink>) -> Notifier {
    let provider = MapProvider::default().with("dogecoin", snapshot("doge", dec!(0.0823)));
    Notifier::new(PayloadBuilder::new(Arc::new(provider)), sink)
}

#[tokio::test]
async fn test_notify_posts_to_default_channel() {
    let sink = Arc::new(RecordingSink::default());
    let delivered = notifier(sink.clone()).notify("dogecoin", None).await.unwrap();

    assert!(delivered);
    let messages = sink.messages.lock().await;
    assert_eq!(messages.len(), 1);
    assert!(messages[0].channel.is_none());
    assert_eq!(messages[0].blocks.len(), 1);
    assert_eq!(
        messages[0].text,
        "DOGE went up with +1.50% in the last 24h, 1 DOGE = $0.0823."
    );
}

#[test]
fn test_notify_unknown_coin_never_delivers() {
    let sink = Arc::new(RecordingSink::default());
    let notifier = notifier(sink.clone());

    let delivered = tokio_test::block_on(notifier.notify("shiba", Some("markets"))).unwrap();

    assert!(!delivered);
    assert!(tokio_test::block_on(sink.messages.lock()).is_empty());
}
