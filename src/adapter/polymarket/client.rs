//! Polymarket Gamma API client.
//!
//! Resolves daily market slugs to their CLOB outcome tokens.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, info, warn};
use url::Url;

use super::dto::GammaMarket;
use crate::config::PolymarketConfig;
use crate::domain::{ResolvedMarket, TokenId};
use crate::error::{Error, Result};
use crate::port::MarketResolver;

/// HTTP client for the Polymarket Gamma API.
pub struct PolymarketClient {
    http: HttpClient,
    gamma_url: String,
}

impl PolymarketClient {
    /// Create a client for the Gamma API at `gamma_url`.
    #[must_use]
    pub fn new(gamma_url: String) -> Self {
        Self {
            http: HttpClient::new(),
            gamma_url,
        }
    }

    #[must_use]
    pub fn from_config(config: &PolymarketConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            gamma_url: config.gamma_url.clone(),
        }
    }

    fn market_url(&self, slug: &str) -> Result<Url> {
        let mut url = Url::parse(&self.gamma_url)?;
        url.path_segments_mut()
            .map_err(|()| Error::Parse(format!("cannot use {} as a base URL", self.gamma_url)))?
            .pop_if_empty()
            .extend(["markets", "slug", slug]);
        Ok(url)
    }

    /// Fetch the Gamma market record for `slug`.
    pub async fn get_market(&self, slug: &str) -> Result<GammaMarket> {
        let url = self.market_url(slug)?;

        info!(url = %url, "Fetching market");

        let market: GammaMarket = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(
            slug = %market.slug,
            question = market.question.as_deref().unwrap_or_default(),
            outcomes = ?market.outcome_names(),
            "Fetched market"
        );

        Ok(market)
    }
}

#[async_trait]
impl MarketResolver for PolymarketClient {
    async fn resolve(&self, slug: &str) -> Result<ResolvedMarket> {
        let market = self.get_market(slug).await?;
        if market.slug.is_empty() {
            return Err(Error::Parse("market record has no slug".into()));
        }
        if market.closed {
            warn!(slug = %market.slug, "Market is already closed");
        }

        let tokens = market.token_ids().into_iter().map(TokenId::from).collect();
        ResolvedMarket::new(market.slug, tokens)
            .ok_or_else(|| Error::Parse("market has no outcome tokens".into()))
    }

    fn venue_name(&self) -> &'static str {
        "Polymarket"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_url_appends_slug_segments() {
        let client = PolymarketClient::new("https://gamma-api.polymarket.com".into());
        let url = client.market_url("btc-up-or-down-on-october-19-2026").unwrap();
        assert_eq!(
            url.as_str(),
            "https://gamma-api.polymarket.com/markets/slug/btc-up-or-down-on-october-19-2026"
        );
    }

    #[test]
    fn market_url_tolerates_trailing_slash() {
        let client = PolymarketClient::new("http://localhost:8080/".into());
        let url = client.market_url("eth").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/markets/slug/eth");
    }

    #[test]
    fn market_url_rejects_garbage_base() {
        let client = PolymarketClient::new("not a url".into());
        assert!(matches!(client.market_url("eth"), Err(Error::Url(_))));
    }
}
