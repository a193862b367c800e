//! Integration tests for configuration loading

use coin_notify::config::Config;
use coin_notify::telemetry::LogFormat;
use std::io::Write;

#[test]
fn test_config_example_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example");
    let config = Config::load(path).unwrap();

    assert_eq!(config.slack.default_channel, "dev");
    assert!(config.chart.url_template.is_none());
    assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [slack]
        default_channel = "price-alerts"

        [chart]
        url_template = "https://charts.test/{{symbol}}.jpg"
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.slack.default_channel, "price-alerts");
    assert_eq!(
        config.chart.url_template.as_deref(),
        Some("https://charts.test/{symbol}.jpg")
    );
    assert_eq!(config.coin_api.timeout_secs, 10);
}

#[test]
fn test_config_load_invalid_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[slack\ndefault_channel = ").unwrap();
    assert!(Config::load(file.path()).is_err());
}
