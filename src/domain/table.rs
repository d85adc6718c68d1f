//! Fixed-size, index-addressed result slots.

use super::DerivedMetrics;

/// One slot per watched instrument, in watch-list order.
#[derive(Debug, Clone, Default)]
pub struct CorrelationTable {
    slots: Vec<Option<DerivedMetrics>>,
}

impl CorrelationTable {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Store `metrics` at `index`, overwriting any earlier value.
    ///
    /// Returns `true` if the slot was empty before. Out-of-range indices are
    /// ignored and return `false`.
    pub fn write(&mut self, index: usize, metrics: DerivedMetrics) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => slot.replace(metrics).is_none(),
            None => false,
        }
    }

    #[must_use]
    pub fn is_filled(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DerivedMetrics> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&DerivedMetrics>> {
        self.slots.iter().map(Option::as_ref)
    }
}
