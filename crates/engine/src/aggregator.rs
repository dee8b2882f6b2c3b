// crates/engine/src/aggregator.rs
use std::sync::{Mutex, PoisonError};

use word_tally_domain::TallyCounts;

/// Run-wide totals that line tasks fold their partial counts into.
///
/// One mutex guards all five counters, so a merge is atomic as a whole and
/// readers can never observe a half-applied line. Tasks lock once per line.
#[derive(Debug, Default)]
pub struct SharedTotals {
    inner: Mutex<TallyCounts>,
}

impl SharedTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every field of `partial` to the totals.
    pub fn merge(&self, partial: &TallyCounts) {
        // Empty lines are common; skip the lock for them.
        if partial.is_zero() {
            return;
        }
        let mut totals = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        *totals += partial;
    }

    /// Final totals. Taking `self` by value means no task can still be merging.
    pub fn into_counts(self) -> TallyCounts {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
