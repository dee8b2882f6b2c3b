// crates/domain/src/tally.rs
use crate::counts::TallyCounts;
use crate::normalize::{normalize_into, raw_tokens};
use crate::targets::TargetWordSet;

/// Tally one line into fresh line-local counters.
///
/// Touches no shared state, so any number of lines can be tallied at once.
/// Tokens that normalize to nothing are skipped and do not count as words.
pub fn tally_line(line: &str, targets: &TargetWordSet) -> TallyCounts {
    let mut counts = TallyCounts::zero();
    let mut word = String::new();

    for raw in raw_tokens(line) {
        normalize_into(raw, &mut word);
        if word.is_empty() {
            continue;
        }
        counts.record(targets.classify(&word));
    }

    counts
}
