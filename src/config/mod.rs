//! Screener configuration loading and validation.
//!
//! Configuration is a TOML file listing the watched instruments in display
//! order, plus optional session, threshold, reference and venue settings.
//! It is loaded once at startup and handed to the screener by value.

use std::collections::HashSet;
use std::path::Path;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{MetricMode, Thresholds, WatchedInstrument};
use crate::error::{ConfigError, Result};

mod logging;

pub use logging::LoggingConfig;

/// Main screener configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// How book prices are framed.
    #[serde(default)]
    pub mode: MetricMode,
    /// Watched instruments, in row order.
    #[serde(default)]
    pub symbols: Vec<WatchedInstrument>,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
    #[serde(default)]
    pub polymarket: PolymarketConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which day's markets to screen and how long to listen.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    /// Explicit market date; today when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Screen the next day's markets, for use after the session close.
    #[serde(default)]
    pub tomorrow: bool,
    /// Stop listening after this many seconds and render what arrived.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl SessionConfig {
    /// Resolution date given today's date.
    #[must_use]
    pub fn target_date(&self, today: NaiveDate) -> NaiveDate {
        let date = self.date.unwrap_or(today);
        if self.tomorrow {
            date.checked_add_days(Days::new(1)).unwrap_or(date)
        } else {
            date
        }
    }
}

/// Highlight cutoffs.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_good")]
    pub good: Decimal,
    #[serde(default)]
    pub mediocre: Option<Decimal>,
    #[serde(default = "default_spread")]
    pub spread: Decimal,
    /// Flag wide spreads in the spread column.
    #[serde(default)]
    pub spread_colors: bool,
}

fn default_good() -> Decimal {
    Decimal::new(75, 2)
}

fn default_spread() -> Decimal {
    Decimal::new(5, 2)
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            good: default_good(),
            mediocre: None,
            spread: default_spread(),
            spread_colors: false,
        }
    }
}

impl From<&ThresholdsConfig> for Thresholds {
    fn from(config: &ThresholdsConfig) -> Self {
        Self {
            good: config.good,
            mediocre: config.mediocre,
            spread: config.spread_colors.then_some(config.spread),
        }
    }
}

/// Reference price-change lookup (Yahoo Finance chart API).
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceConfig {
    /// When false, the change column is left empty and nothing is fetched.
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_reference_url")]
    pub url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_true() -> bool {
    true
}

fn default_reference_url() -> String {
    "https://query1.finance.yahoo.com".into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: default_reference_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Polymarket endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct PolymarketConfig {
    /// Gamma API base URL, used to resolve market slugs.
    #[serde(default = "default_gamma_url")]
    pub gamma_url: String,
    /// CLOB market-channel websocket URL.
    #[serde(default = "default_ws_url")]
    pub ws_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_gamma_url() -> String {
    "https://gamma-api.polymarket.com".into()
}

fn default_ws_url() -> String {
    "wss://ws-subscriptions-clob.polymarket.com/ws/market".into()
}

impl Default for PolymarketConfig {
    fn default() -> Self {
        Self {
            gamma_url: default_gamma_url(),
            ws_url: default_ws_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration text.
    #[allow(clippy::result_large_err)]
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.symbols.is_empty() {
            return Err(ConfigError::MissingField { field: "symbols" }.into());
        }

        let mut seen = HashSet::new();
        for instrument in &self.symbols {
            if instrument.symbol.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "symbols",
                    reason: "symbol cannot be empty".into(),
                }
                .into());
            }
            if !seen.insert(instrument.symbol.to_lowercase()) {
                return Err(ConfigError::InvalidValue {
                    field: "symbols",
                    reason: format!("duplicate symbol {}", instrument.symbol),
                }
                .into());
            }
        }

        if let Some(mediocre) = self.thresholds.mediocre {
            if mediocre < self.thresholds.good {
                return Err(ConfigError::InvalidValue {
                    field: "mediocre",
                    reason: format!(
                        "{mediocre} is below the good bound {}",
                        self.thresholds.good
                    ),
                }
                .into());
            }
        }

        if self.session.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than zero".into(),
            }
            .into());
        }

        if self.polymarket.gamma_url.is_empty() {
            return Err(ConfigError::MissingField { field: "gamma_url" }.into());
        }
        if self.polymarket.ws_url.is_empty() {
            return Err(ConfigError::MissingField { field: "ws_url" }.into());
        }
        if self.reference.enabled && self.reference.url.is_empty() {
            return Err(ConfigError::MissingField { field: "url" }.into());
        }

        Ok(())
    }

    /// Threshold bands for the classifier.
    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::from(&self.thresholds)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
