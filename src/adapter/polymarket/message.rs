//! Polymarket market-channel websocket message types.
//!
//! A text frame carries either a single event object or a JSON array of
//! them; the initial snapshot after subscribing is an array of `book`
//! events, one per subscribed token.
//!
//! Example frame:
//! ```json
//! [{"event_type":"book","asset_id":"123...","market":"0x...","bids":[...],"asks":[...]}]
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{BookUpdateEvent, EventKind, RawLevel, TokenId};

/// Subscription request sent to the market channel.
#[derive(Debug, Serialize)]
pub struct PolymarketSubscribeMessage {
    pub assets_ids: Vec<String>,
    #[serde(rename = "type")]
    pub msg_type: String,
}

impl PolymarketSubscribeMessage {
    pub fn new(asset_ids: Vec<String>) -> Self {
        Self {
            assets_ids: asset_ids,
            msg_type: "market".into(),
        }
    }
}

/// One text frame from the market channel.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PolymarketWsMessage {
    Batch(Vec<PolymarketEvent>),
    Single(PolymarketEvent),
}

impl PolymarketWsMessage {
    /// Flatten the frame into domain events, preserving order.
    pub fn into_events(self) -> Vec<BookUpdateEvent> {
        match self {
            Self::Batch(events) => events.into_iter().map(PolymarketEvent::into_event).collect(),
            Self::Single(event) => vec![event.into_event()],
        }
    }
}

/// A single event object. Only `book` events carry levels.
#[derive(Debug, Deserialize)]
pub struct PolymarketEvent {
    pub event_type: String,
    #[serde(default)]
    pub asset_id: String,
    #[serde(default, alias = "buys")]
    pub bids: Vec<PolymarketWsPriceLevel>,
    #[serde(default, alias = "sells")]
    pub asks: Vec<PolymarketWsPriceLevel>,
}

impl PolymarketEvent {
    /// Convert to a domain event, keeping levels in wire order.
    #[must_use]
    pub fn into_event(self) -> BookUpdateEvent {
        let kind = if self.event_type == "book" {
            EventKind::Book
        } else {
            EventKind::Other(self.event_type)
        };

        BookUpdateEvent {
            kind,
            asset_id: TokenId::from(self.asset_id),
            bids: self.bids.into_iter().map(Into::into).collect(),
            asks: self.asks.into_iter().map(Into::into).collect(),
        }
    }
}

/// Price level as received from the websocket (strings, not decimals).
#[derive(Debug, Clone, Deserialize)]
pub struct PolymarketWsPriceLevel {
    pub price: String,
    pub size: String,
}

impl From<PolymarketWsPriceLevel> for RawLevel {
    fn from(level: PolymarketWsPriceLevel) -> Self {
        Self::new(level.price, level.size)
    }
}
