//! Yahoo Finance reference prices.

mod client;
mod dto;

pub use client::YahooClient;
pub use dto::{ChartMeta, ChartResponse};
