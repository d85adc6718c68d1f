//! Application wiring: build the adapters and run a session.

mod render;
mod screener;

pub use render::render_table;
pub use screener::{ScreenReport, Screener, ScreenerSettings, SessionEnd};

use std::time::Duration;

use chrono::NaiveDate;
use tracing::info;

use crate::adapter::polymarket::{PolymarketBookStream, PolymarketClient};
use crate::adapter::yahoo::YahooClient;
use crate::config::Config;
use crate::error::Result;

/// Main application entry point.
pub struct App;

impl App {
    /// Run one session against the live venues.
    ///
    /// `today` is the local date the session date is derived from.
    pub async fn screen(config: &Config, today: NaiveDate) -> Result<ScreenReport> {
        let settings = Self::settings(config, today);
        info!(date = %settings.date, "daybook screening");

        let resolver = PolymarketClient::from_config(&config.polymarket);
        let reference = YahooClient::from_config(&config.reference)?;
        let mut stream = PolymarketBookStream::new(config.polymarket.ws_url.clone());

        let screener = Screener::new(settings, &resolver);
        let screener = if config.reference.enabled {
            screener.with_reference(&reference)
        } else {
            screener
        };

        screener.run(&mut stream).await
    }

    /// Session settings derived from configuration.
    #[must_use]
    pub fn settings(config: &Config, today: NaiveDate) -> ScreenerSettings {
        ScreenerSettings {
            instruments: config.symbols.clone(),
            mode: config.mode,
            date: config.session.target_date(today),
            thresholds: config.thresholds(),
            timeout: config.session.timeout_secs.map(Duration::from_secs),
        }
    }
}
