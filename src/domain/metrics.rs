//! Metric derivation from raw order-book levels.
//!
//! The market stream lists each side of the book so that the most
//! competitive price is the *last* level. Best prices are taken from that
//! position, never by scanning for a minimum or maximum.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::book::RawLevel;
use super::error::DomainError;
use super::tier::Direction;

/// How book prices are framed in the screener.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricMode {
    /// Best bid, best ask and their spread.
    BidAsk,
    /// Implied yes/no prices and their deviation from a sum of one.
    #[default]
    YesNo,
}

impl MetricMode {
    /// Column headers for the two price columns.
    #[must_use]
    pub const fn price_headers(self) -> [&'static str; 2] {
        match self {
            Self::BidAsk => ["Best Bid", "Best Ask"],
            Self::YesNo => ["Yes Price", "No Price"],
        }
    }
}

impl fmt::Display for MetricMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BidAsk => write!(f, "bid-ask"),
            Self::YesNo => write!(f, "yes-no"),
        }
    }
}

impl FromStr for MetricMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bid-ask" | "bidask" => Ok(Self::BidAsk),
            "yes-no" | "yesno" => Ok(Self::YesNo),
            other => Err(format!("unknown mode '{other}', expected bid-ask or yes-no")),
        }
    }
}

/// Prices derived from one book snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    BidAsk {
        bid: Option<Decimal>,
        ask: Option<Decimal>,
    },
    YesNo {
        yes: Option<Decimal>,
        no: Option<Decimal>,
    },
}

/// A price column with the value shown and the value classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceCell {
    /// Value rendered in the table.
    pub value: Option<Decimal>,
    /// Cost of taking the side in `bias`, which is what gets classified.
    pub cost: Option<Decimal>,
    pub bias: Direction,
}

impl Quote {
    /// Spread of the quote, absent unless both sides are known.
    ///
    /// Bid/ask: `ask - bid`. Yes/no: `(yes + no) - 1`.
    #[must_use]
    pub fn spread(&self) -> Option<Decimal> {
        match *self {
            Self::BidAsk { bid, ask } => Some(ask? - bid?),
            Self::YesNo { yes, no } => Some(yes? + no? - Decimal::ONE),
        }
    }

    /// The two price columns, left to right.
    ///
    /// Buying "up" costs the ask; buying "down" costs one minus the bid.
    #[must_use]
    pub fn price_cells(&self) -> [PriceCell; 2] {
        match *self {
            Self::BidAsk { bid, ask } => [
                PriceCell {
                    value: bid,
                    cost: bid.map(|bid| Decimal::ONE - bid),
                    bias: Direction::Down,
                },
                PriceCell {
                    value: ask,
                    cost: ask,
                    bias: Direction::Up,
                },
            ],
            Self::YesNo { yes, no } => [
                PriceCell {
                    value: yes,
                    cost: yes,
                    bias: Direction::Up,
                },
                PriceCell {
                    value: no,
                    cost: no,
                    bias: Direction::Down,
                },
            ],
        }
    }
}

/// Per-instrument snapshot stored in the correlation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub quote: Quote,
    /// Reference price change in percent; `None` when disabled or unknown.
    pub change: Option<f64>,
}

impl DerivedMetrics {
    #[must_use]
    pub fn new(quote: Quote, change: Option<f64>) -> Self {
        Self {
            quote,
            change: change.filter(|c| c.is_finite()),
        }
    }

    #[must_use]
    pub fn spread(&self) -> Option<Decimal> {
        self.quote.spread()
    }
}

/// Best price on one side of the book: the price of the last level.
///
/// # Errors
///
/// Returns [`DomainError::MalformedPrice`] if that price is not a decimal.
pub fn best_price(levels: &[RawLevel]) -> Result<Option<Decimal>, DomainError> {
    let Some(level) = levels.last() else {
        return Ok(None);
    };
    Decimal::from_str(&level.price)
        .map(Some)
        .map_err(|e| DomainError::MalformedPrice {
            price: level.price.clone(),
            reason: e.to_string(),
        })
}

/// Derive the quote for `mode` from both sides of a book.
///
/// # Errors
///
/// Returns [`DomainError::MalformedPrice`] if either best price is malformed.
pub fn derive_quote(
    mode: MetricMode,
    bids: &[RawLevel],
    asks: &[RawLevel],
) -> Result<Quote, DomainError> {
    let best_bid = best_price(bids)?;
    let best_ask = best_price(asks)?;

    Ok(match mode {
        MetricMode::BidAsk => Quote::BidAsk {
            bid: best_bid,
            ask: best_ask,
        },
        MetricMode::YesNo => Quote::YesNo {
            yes: best_ask,
            no: best_bid.map(|bid| Decimal::ONE - bid),
        },
    })
}
