//! Completion tracking for the streaming session.

/// Counts distinct filled instruments and says when to stop listening.
#[derive(Debug, Clone)]
pub struct CompletionGate {
    seen: Vec<bool>,
    filled: usize,
}

impl CompletionGate {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            seen: vec![false; total],
            filled: 0,
        }
    }

    /// Record a fill of `index`. Returns `true` the first time it is seen.
    pub fn record(&mut self, index: usize) -> bool {
        match self.seen.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                self.filled += 1;
                true
            }
            _ => false,
        }
    }

    /// True while fewer instruments are filled than are watched.
    #[must_use]
    pub fn should_continue(&self) -> bool {
        self.filled < self.seen.len()
    }

    #[must_use]
    pub const fn filled(&self) -> usize {
        self.filled
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.seen.len()
    }
}
