//! Ports for the screener's external collaborators.
//!
//! The screener resolves markets, streams books and looks up reference
//! price changes only through these traits. Adapters in [`crate::adapter`]
//! implement them for Polymarket and Yahoo Finance; tests use scripted fakes.

use async_trait::async_trait;

use crate::domain::{BookUpdateEvent, ResolvedMarket, TokenId};
use crate::error::Result;

/// Maps a market slug to its outcome tokens.
#[async_trait]
pub trait MarketResolver: Send + Sync {
    /// Resolve `slug`; any failure is fatal for the run.
    async fn resolve(&self, slug: &str) -> Result<ResolvedMarket>;

    /// Venue name for logging.
    fn venue_name(&self) -> &'static str;
}

/// Source of order-book update events.
///
/// Delivery is pull-based: the screener asks for the next event only after
/// it has fully handled the previous one, and stops pulling when it has
/// what it needs. Dropping the stream closes the connection.
#[async_trait]
pub trait BookStream: Send {
    /// Connect and subscribe to `tokens`.
    async fn subscribe(&mut self, tokens: &[TokenId]) -> Result<()>;

    /// Next event, or `None` once the upstream has closed.
    async fn next_event(&mut self) -> Result<Option<BookUpdateEvent>>;

    /// Venue name for logging.
    fn venue_name(&self) -> &'static str;
}

/// Source of reference price changes used as a directional signal.
#[async_trait]
pub trait ReferencePrices: Send + Sync {
    /// Percent change of `ticker` against its previous close.
    async fn change(&self, ticker: &str) -> Result<f64>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;
}
