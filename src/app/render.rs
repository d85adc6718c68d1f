//! Text table rendering of a finished session.

use owo_colors::{OwoColorize, Stream};
use tabled::builder::Builder;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Modify, Style};

use crate::domain::{Cell, MetricMode, ScreenerRow, Tier};

/// Render rows as a table with mode-specific headers.
///
/// Highlights are applied only when stdout supports colour; see
/// [`owo_colors::set_override`] to force them off.
#[must_use]
pub fn render_table(mode: MetricMode, rows: &[ScreenerRow]) -> String {
    let [first, second] = mode.price_headers();

    let mut builder = Builder::default();
    builder.push_record(["Symbol", first, second, "Spread", "Change"].map(String::from));
    for row in rows {
        builder.push_record([
            row.symbol.clone(),
            paint(&row.prices[0]),
            paint(&row.prices[1]),
            paint(&row.spread),
            paint(&row.change),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .with(Modify::new(Rows::first()).with(Alignment::left()));

    table.to_string()
}

fn paint(cell: &Cell) -> String {
    let text = &cell.text;
    match cell.tier {
        Tier::Favorable => text.if_supports_color(Stream::Stdout, |t| t.green()).to_string(),
        Tier::Mediocre => text.if_supports_color(Stream::Stdout, |t| t.yellow()).to_string(),
        Tier::Unfavorable => text.if_supports_color(Stream::Stdout, |t| t.red()).to_string(),
        Tier::Neutral | Tier::NotApplicable => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DerivedMetrics, Quote, Thresholds, WatchedInstrument};
    use rust_decimal_macros::dec;

    fn plain() {
        owo_colors::set_override(false);
    }

    #[test]
    fn yes_no_table_has_mode_headers() {
        plain();
        let metrics = DerivedMetrics::new(
            Quote::YesNo {
                yes: Some(dec!(0.55)),
                no: Some(dec!(0.7)),
            },
            Some(1.25),
        );
        let rows = vec![ScreenerRow::build(
            &WatchedInstrument::new("BTC"),
            Some(&metrics),
            &Thresholds::default(),
        )];

        let out = render_table(MetricMode::YesNo, &rows);

        assert!(out.contains("Yes Price"));
        assert!(out.contains("No Price"));
        assert!(out.contains("BTC"));
        assert!(out.contains("0.55"));
        assert!(out.contains("0.70"));
        assert!(out.contains("0.25"));
        assert!(out.contains("+1.25%"));
    }

    #[test]
    fn bid_ask_table_shows_placeholders() {
        plain();
        let rows = vec![ScreenerRow::build(
            &WatchedInstrument::new("ETH"),
            None,
            &Thresholds::default(),
        )];

        let out = render_table(MetricMode::BidAsk, &rows);

        assert!(out.contains("Best Bid"));
        assert!(out.contains("Best Ask"));
        assert!(out.contains("N/A"));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn rows_keep_given_order() {
        plain();
        let thresholds = Thresholds::default();
        let rows: Vec<_> = ["AAA", "BBB", "CCC"]
            .iter()
            .map(|s| ScreenerRow::build(&WatchedInstrument::new(*s), None, &thresholds))
            .collect();

        let out = render_table(MetricMode::YesNo, &rows);
        let a = out.find("AAA").unwrap();
        let b = out.find("BBB").unwrap();
        let c = out.find("CCC").unwrap();
        assert!(a < b && b < c);
    }
}
