//! Command-line interface definitions.

pub mod output;
pub mod run;

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::MetricMode;
use crate::error::Result;

/// Daybook - point-in-time screener for daily up-or-down prediction markets.
#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Screen the markets of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Screen tomorrow's daily markets, for use after the session close
    #[arg(long)]
    pub tomorrow: bool,

    /// Price framing: bid-ask or yes-no
    #[arg(long)]
    pub mode: Option<MetricMode>,

    /// Skip the reference price-change lookup
    #[arg(long)]
    pub no_reference: bool,

    /// Disable highlight colours
    #[arg(long)]
    pub no_color: bool,

    /// Stop listening after this many seconds and render what arrived
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the file configuration.
    #[allow(clippy::result_large_err)]
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(date) = self.date {
            config.session.date = Some(date);
        }
        if self.tomorrow {
            config.session.tomorrow = true;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.no_reference {
            config.reference.enabled = false;
        }
        if let Some(timeout) = self.timeout {
            config.session.timeout_secs = Some(timeout);
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if self.json_logs {
            config.logging.format = "json".to_string();
        }

        config.validate()
    }
}
