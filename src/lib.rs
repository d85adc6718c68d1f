//! Daybook - point-in-time screener for daily up-or-down prediction markets.
//!
//! Resolves a watch list of instruments to their daily Polymarket markets,
//! streams one order-book snapshot per market, joins each with a reference
//! price change and renders a single comparison table.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Instruments, book events, metric derivation, classification
//!   and the session state (correlation table, completion gate)
//! - [`port`] - Traits for the market resolver, book stream and reference source
//! - [`adapter`] - Polymarket and Yahoo Finance implementations of the ports
//! - [`app`] - The screener session and table rendering
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use daybook::domain::{derive_quote, MetricMode, RawLevel};
//! use rust_decimal_macros::dec;
//!
//! let bids = vec![RawLevel::new("0.30", "120")];
//! let asks = vec![RawLevel::new("0.55", "80")];
//! let quote = derive_quote(MetricMode::YesNo, &bids, &asks).unwrap();
//!
//! assert_eq!(quote.spread(), Some(dec!(0.25)));
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
