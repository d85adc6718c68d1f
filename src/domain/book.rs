//! Order-book update events as delivered by the market stream.

use super::TokenId;

/// One price level as received: price and size are still text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLevel {
    pub price: String,
    pub size: String,
}

impl RawLevel {
    pub fn new(price: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            size: size.into(),
        }
    }
}

/// Kind of a streamed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// Full order-book snapshot for one asset.
    Book,
    /// Anything else the venue sends (`price_change`, `tick_size_change`, ...).
    Other(String),
}

/// A single streamed update, consumed once.
///
/// Levels are kept in the order the venue sent them; the most competitive
/// price sits last on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookUpdateEvent {
    pub kind: EventKind,
    pub asset_id: TokenId,
    pub bids: Vec<RawLevel>,
    pub asks: Vec<RawLevel>,
}

impl BookUpdateEvent {
    /// A book snapshot event.
    pub fn book(asset_id: impl Into<TokenId>, bids: Vec<RawLevel>, asks: Vec<RawLevel>) -> Self {
        Self {
            kind: EventKind::Book,
            asset_id: asset_id.into(),
            bids,
            asks,
        }
    }

    /// A non-book event with no levels.
    pub fn other(kind: impl Into<String>, asset_id: impl Into<TokenId>) -> Self {
        Self {
            kind: EventKind::Other(kind.into()),
            asset_id: asset_id.into(),
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }
}
