//! Threshold classification of screener cells.
//!
//! A price is only highlighted when the reference market already moved in
//! the direction that price would profit from.

use rust_decimal::Decimal;

/// Directional bias of a price column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Whether a reference change points the same way. Zero and NaN never agree.
    #[must_use]
    pub fn agrees_with(self, change: f64) -> bool {
        match self {
            Self::Up => change > 0.0,
            Self::Down => change < 0.0,
        }
    }
}

/// Presentation tier of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Favorable,
    Mediocre,
    Neutral,
    Unfavorable,
    NotApplicable,
}

/// Cutoffs used by [`classify`] and [`classify_spread`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Prices at or below this are favorable.
    pub good: Decimal,
    /// Prices above `good` and at or below this are mediocre.
    pub mediocre: Option<Decimal>,
    /// Spreads at or above this are flagged; `None` disables spread tiers.
    pub spread: Option<Decimal>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            good: Decimal::new(75, 2),
            mediocre: None,
            spread: None,
        }
    }
}

/// Classify a price against `thresholds`, gated on the reference direction.
#[must_use]
pub fn classify(
    value: Option<Decimal>,
    signal: Option<f64>,
    bias: Direction,
    thresholds: &Thresholds,
) -> Tier {
    let (Some(value), Some(signal)) = (value, signal) else {
        return Tier::NotApplicable;
    };
    if signal.is_nan() {
        return Tier::NotApplicable;
    }
    if !bias.agrees_with(signal) {
        return Tier::Neutral;
    }

    if value <= thresholds.good {
        Tier::Favorable
    } else if thresholds.mediocre.is_some_and(|bound| value <= bound) {
        Tier::Mediocre
    } else {
        Tier::Neutral
    }
}

/// Flag wide spreads regardless of direction.
#[must_use]
pub fn classify_spread(spread: Option<Decimal>, thresholds: &Thresholds) -> Tier {
    match (spread, thresholds.spread) {
        (None, _) => Tier::NotApplicable,
        (Some(spread), Some(bound)) if spread >= bound => Tier::Mediocre,
        (Some(_), _) => Tier::Neutral,
    }
}

/// Tier of the reference change itself: up is favorable, down unfavorable.
#[must_use]
pub fn classify_change(change: Option<f64>) -> Tier {
    match change {
        Some(c) if c.is_nan() => Tier::NotApplicable,
        Some(c) if c >= 0.0 => Tier::Favorable,
        Some(_) => Tier::Unfavorable,
        None => Tier::NotApplicable,
    }
}
