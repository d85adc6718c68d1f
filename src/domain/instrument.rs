//! Watched instruments and the markets they resolve to.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use super::TokenId;

/// A configured instrument: display symbol plus optional reference ticker.
///
/// Order in the configuration is significant. The position of an instrument
/// in the watch list is the row index used for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WatchedInstrument {
    pub symbol: String,
    /// Ticker used for the reference price-change lookup.
    #[serde(default)]
    pub alias: Option<String>,
}

impl WatchedInstrument {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            alias: None,
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Ticker for the reference lookup, falling back to the display symbol.
    #[must_use]
    pub fn reference_ticker(&self) -> &str {
        match self.alias.as_deref() {
            Some(alias) if !alias.is_empty() => alias,
            _ => &self.symbol,
        }
    }

    /// Slug of the daily up-or-down market for this instrument on `date`.
    ///
    /// Format: `<symbol>-up-or-down-on-<month>-<day>-<year>`, lower-cased,
    /// with an unpadded day (e.g. `btc-up-or-down-on-october-9-2026`).
    #[must_use]
    pub fn market_slug(&self, date: NaiveDate) -> String {
        let month = date.format("%B").to_string();
        format!(
            "{}-up-or-down-on-{}-{}-{}",
            self.symbol,
            month,
            date.day(),
            date.year()
        )
        .to_lowercase()
    }
}

/// A venue market resolved for one watched instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMarket {
    slug: String,
    tokens: Vec<TokenId>,
}

impl ResolvedMarket {
    /// Returns `None` when the market has no outcome tokens.
    pub fn new(slug: impl Into<String>, tokens: Vec<TokenId>) -> Option<Self> {
        if tokens.is_empty() {
            return None;
        }
        Some(Self {
            slug: slug.into(),
            tokens,
        })
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// All outcome tokens, in venue order.
    #[must_use]
    pub fn tokens(&self) -> &[TokenId] {
        &self.tokens
    }

    /// The first outcome token ("Up" / "Yes"), which is the one streamed.
    #[must_use]
    pub fn primary_token(&self) -> &TokenId {
        &self.tokens[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_ticker_defaults_to_symbol() {
        let instrument = WatchedInstrument::new("BTC");
        assert_eq!(instrument.reference_ticker(), "BTC");
    }

    #[test]
    fn reference_ticker_prefers_alias() {
        let instrument = WatchedInstrument::new("BTC").with_alias("BTC-USD");
        assert_eq!(instrument.reference_ticker(), "BTC-USD");
    }

    #[test]
    fn empty_alias_falls_back_to_symbol() {
        let instrument = WatchedInstrument::new("ETH").with_alias("");
        assert_eq!(instrument.reference_ticker(), "ETH");
    }

    #[test]
    fn market_slug_is_lowercase_with_unpadded_day() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 9).unwrap();
        let slug = WatchedInstrument::new("NVDA").market_slug(date);
        assert_eq!(slug, "nvda-up-or-down-on-october-9-2026");
    }

    #[test]
    fn resolved_market_requires_tokens() {
        assert!(ResolvedMarket::new("slug", vec![]).is_none());

        let market =
            ResolvedMarket::new("slug", vec![TokenId::from("up"), TokenId::from("down")]).unwrap();
        assert_eq!(market.primary_token().as_str(), "up");
        assert_eq!(market.tokens().len(), 2);
        assert_eq!(market.slug(), "slug");
    }
}
