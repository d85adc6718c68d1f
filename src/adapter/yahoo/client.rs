//! Yahoo Finance chart API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info};
use url::Url;

use super::dto::ChartResponse;
use crate::config::ReferenceConfig;
use crate::error::{Error, Result};
use crate::port::ReferencePrices;

/// Yahoo rejects requests without a browser-like user agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) daybook";

/// HTTP client for the Yahoo Finance chart API.
pub struct YahooClient {
    http: HttpClient,
    base_url: String,
}

impl YahooClient {
    /// Create a client for the chart API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP client cannot be built. There is
    /// no fallback client, since one without the user agent gets rejected.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// # Errors
    ///
    /// See [`YahooClient::new`].
    pub fn from_config(config: &ReferenceConfig) -> Result<Self> {
        Self::new(config.url.clone(), Duration::from_millis(config.timeout_ms))
    }

    fn chart_url(&self, ticker: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| Error::Parse(format!("cannot use {} as a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", ticker]);
        url.query_pairs_mut()
            .append_pair("range", "1d")
            .append_pair("interval", "1d");
        Ok(url)
    }
}

#[async_trait]
impl ReferencePrices for YahooClient {
    async fn change(&self, ticker: &str) -> Result<f64> {
        let url = self.chart_url(ticker)?;

        info!(ticker, "Fetching reference change");

        let response: ChartResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(err) = response.chart.error {
            return Err(Error::Parse(format!(
                "{}: {}",
                err.code.unwrap_or_default(),
                err.description.unwrap_or_default()
            )));
        }

        let change = response
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .and_then(|result| result.meta.change_percent())
            .ok_or_else(|| Error::Parse(format!("no price data for {ticker}")))?;

        debug!(ticker, change, "Fetched reference change");

        Ok(change)
    }

    fn provider_name(&self) -> &'static str {
        "Yahoo Finance"
    }
}
