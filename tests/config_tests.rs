use std::io::Write;

use chrono::NaiveDate;
use daybook::config::Config;
use daybook::domain::MetricMode;
use daybook::error::{ConfigError, Error};
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn full_config_loads() {
    let toml = r#"
mode = "bid-ask"

[[symbols]]
symbol = "BTC"
alias = "BTC-USD"

[[symbols]]
symbol = "NVDA"

[session]
date = "2026-10-19"
tomorrow = true
timeout_secs = 90

[thresholds]
good = 0.50
mediocre = 0.75
spread = 0.04
spread_colors = true

[reference]
enabled = false

[polymarket]
gamma_url = "http://localhost:9000"
ws_url = "ws://localhost:9001"

[logging]
level = "debug"
format = "json"
"#;

    let file = write_temp_config(toml);
    let config = Config::load(file.path()).expect("config loads");

    assert_eq!(config.mode, MetricMode::BidAsk);
    let symbols: Vec<_> = config.symbols.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(symbols, ["BTC", "NVDA"]);
    assert_eq!(config.symbols[0].reference_ticker(), "BTC-USD");
    assert_eq!(config.symbols[1].reference_ticker(), "NVDA");
    assert_eq!(
        config.session.target_date(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()),
        NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
    );
    assert_eq!(config.session.timeout_secs, Some(90));

    let thresholds = config.thresholds();
    assert_eq!(thresholds.good, dec!(0.50));
    assert_eq!(thresholds.mediocre, Some(dec!(0.75)));
    assert_eq!(thresholds.spread, Some(dec!(0.04)));

    assert!(!config.reference.enabled);
    assert_eq!(config.polymarket.ws_url, "ws://localhost:9001");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn config_rejects_empty_watch_list() {
    let file = write_temp_config("mode = \"yes-no\"\n");
    let result = Config::load(file.path());

    assert!(
        matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "symbols" }))
        ),
        "Expected missing symbols error"
    );
}

#[test]
fn config_rejects_duplicate_symbols() {
    let toml = r#"
[[symbols]]
symbol = "ETH"

[[symbols]]
symbol = "eth"
"#;
    let file = write_temp_config(toml);

    match Config::load(file.path()) {
        Err(Error::Config(ConfigError::InvalidValue { field: "symbols", reason })) => {
            assert!(reason.contains("duplicate"), "reason: {reason}");
        }
        Err(err) => panic!("Expected duplicate symbol error, got {err}"),
        Ok(_) => panic!("Expected duplicate symbols to be rejected"),
    }
}

#[test]
fn config_rejects_inverted_bands() {
    let toml = r#"
[[symbols]]
symbol = "ETH"

[thresholds]
good = 0.80
mediocre = 0.60
"#;
    let file = write_temp_config(toml);

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "mediocre",
            ..
        }))
    ));
}

#[test]
fn config_rejects_bad_date() {
    let toml = r#"
[[symbols]]
symbol = "ETH"

[session]
date = "October 19"
"#;
    let file = write_temp_config(toml);

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn config_rejects_unknown_mode() {
    let toml = r#"
mode = "mid"

[[symbols]]
symbol = "ETH"
"#;
    let file = write_temp_config(toml);

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn missing_file_is_a_read_error() {
    let result = Config::load("/nonexistent/daybook/config.toml");
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}
