//! Render-time projection of one instrument.

use rust_decimal::{Decimal, RoundingStrategy};

use super::tier::{classify, classify_change, classify_spread, Thresholds, Tier};
use super::{DerivedMetrics, WatchedInstrument};

/// Shown for prices and spreads that are not available.
pub const MISSING_PRICE: &str = "N/A";

/// Shown for a reference change that was not fetched.
pub const MISSING_CHANGE: &str = "-";

/// Text of a cell and the tier used to pick its highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tier: Tier,
}

impl Cell {
    fn new(text: impl Into<String>, tier: Tier) -> Self {
        Self {
            text: text.into(),
            tier,
        }
    }
}

/// One row of the rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenerRow {
    pub symbol: String,
    /// The two price columns, left to right.
    pub prices: [Cell; 2],
    pub spread: Cell,
    pub change: Cell,
}

impl ScreenerRow {
    /// Project an instrument and its slot; an empty slot renders placeholders.
    #[must_use]
    pub fn build(
        instrument: &WatchedInstrument,
        metrics: Option<&DerivedMetrics>,
        thresholds: &Thresholds,
    ) -> Self {
        let Some(metrics) = metrics else {
            return Self {
                symbol: instrument.symbol.clone(),
                prices: [
                    Cell::new(MISSING_PRICE, Tier::NotApplicable),
                    Cell::new(MISSING_PRICE, Tier::NotApplicable),
                ],
                spread: Cell::new(MISSING_PRICE, Tier::NotApplicable),
                change: Cell::new(MISSING_CHANGE, Tier::NotApplicable),
            };
        };

        let prices = metrics.quote.price_cells().map(|cell| {
            Cell::new(
                format_price(cell.value),
                classify(cell.cost, metrics.change, cell.bias, thresholds),
            )
        });
        let spread = metrics.spread();

        Self {
            symbol: instrument.symbol.clone(),
            prices,
            spread: Cell::new(format_price(spread), classify_spread(spread, thresholds)),
            change: Cell::new(format_change(metrics.change), classify_change(metrics.change)),
        }
    }
}

/// Two decimal places, rounding half away from zero.
#[must_use]
pub fn format_price(value: Option<Decimal>) -> String {
    match value {
        Some(value) => {
            let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        None => MISSING_PRICE.to_string(),
    }
}

/// Signed percentage with two decimal places.
#[must_use]
pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(change) if change.is_finite() => format!("{change:+.2}%"),
        _ => MISSING_CHANGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Quote;
    use rust_decimal_macros::dec;

    fn thresholds() -> Thresholds {
        Thresholds {
            good: dec!(0.75),
            mediocre: None,
            spread: Some(dec!(0.10)),
        }
    }

    #[test]
    fn prices_format_to_two_places() {
        assert_eq!(format_price(Some(dec!(0.5))), "0.50");
        assert_eq!(format_price(Some(dec!(0.125))), "0.13");
        assert_eq!(format_price(Some(dec!(-0.005))), "-0.01");
        assert_eq!(format_price(None), "N/A");
    }

    #[test]
    fn change_formats_with_sign() {
        assert_eq!(format_change(Some(1.234)), "+1.23%");
        assert_eq!(format_change(Some(-0.5)), "-0.50%");
        assert_eq!(format_change(Some(0.0)), "+0.00%");
        assert_eq!(format_change(None), "-");
        assert_eq!(format_change(Some(f64::NAN)), "-");
    }

    #[test]
    fn empty_slot_renders_placeholders() {
        let row = ScreenerRow::build(&WatchedInstrument::new("BTC"), None, &thresholds());
        assert_eq!(row.symbol, "BTC");
        assert_eq!(row.prices[0].text, "N/A");
        assert_eq!(row.prices[1].text, "N/A");
        assert_eq!(row.spread.text, "N/A");
        assert_eq!(row.change.text, "-");
    }

    #[test]
    fn up_move_highlights_cheap_yes() {
        let metrics = DerivedMetrics::new(
            Quote::YesNo {
                yes: Some(dec!(0.55)),
                no: Some(dec!(0.70)),
            },
            Some(0.8),
        );
        let row = ScreenerRow::build(&WatchedInstrument::new("ETH"), Some(&metrics), &thresholds());

        assert_eq!(row.prices[0], Cell::new("0.55", Tier::Favorable));
        assert_eq!(row.prices[1], Cell::new("0.70", Tier::Neutral));
        assert_eq!(row.spread, Cell::new("0.25", Tier::Mediocre));
        assert_eq!(row.change, Cell::new("+0.80%", Tier::Favorable));
    }

    #[test]
    fn missing_change_leaves_prices_unhighlighted() {
        let metrics = DerivedMetrics::new(
            Quote::BidAsk {
                bid: Some(dec!(0.40)),
                ask: Some(dec!(0.45)),
            },
            None,
        );
        let row = ScreenerRow::build(&WatchedInstrument::new("SPX"), Some(&metrics), &thresholds());

        assert_eq!(row.prices[0], Cell::new("0.40", Tier::NotApplicable));
        assert_eq!(row.prices[1], Cell::new("0.45", Tier::NotApplicable));
        assert_eq!(row.spread, Cell::new("0.05", Tier::Neutral));
        assert_eq!(row.change, Cell::new("-", Tier::NotApplicable));
    }
}
