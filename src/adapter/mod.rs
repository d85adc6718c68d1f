//! Adapters implementing the screener ports.
//!
//! - [`polymarket`] - Gamma API market resolution and the CLOB market websocket
//! - [`yahoo`] - Yahoo Finance chart API for reference price changes

pub mod polymarket;
pub mod yahoo;
