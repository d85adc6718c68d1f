//! Screener domain: instruments, book events, metrics and session state.
//!
//! Everything here is synchronous and free of I/O. The orchestrator in
//! [`crate::app`] drives these types with data from the ports.

pub mod book;
pub mod error;
pub mod gate;
pub mod id;
pub mod index;
pub mod instrument;
pub mod metrics;
pub mod row;
pub mod table;
pub mod tier;

pub use book::{BookUpdateEvent, EventKind, RawLevel};
pub use error::DomainError;
pub use gate::CompletionGate;
pub use id::TokenId;
pub use index::AssetIndex;
pub use instrument::{ResolvedMarket, WatchedInstrument};
pub use metrics::{best_price, derive_quote, DerivedMetrics, MetricMode, PriceCell, Quote};
pub use row::{Cell, ScreenerRow};
pub use table::CorrelationTable;
pub use tier::{classify, classify_change, classify_spread, Direction, Thresholds, Tier};
