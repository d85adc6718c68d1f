//! Polymarket integration.

mod client;
mod dto;
mod message;
mod websocket;

pub use client::PolymarketClient;
pub use dto::GammaMarket;
pub use message::{
    PolymarketEvent, PolymarketSubscribeMessage, PolymarketWsMessage, PolymarketWsPriceLevel,
};
pub use websocket::PolymarketBookStream;
