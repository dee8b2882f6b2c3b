// crates/engine/src/dispatch.rs
use std::sync::Arc;

use word_tally_domain::{TallyCounts, TargetWordSet, tally_line};
use word_tally_ports::{LineSource, WorkerPool};
use word_tally_shared_kernel::ApplicationError;

use crate::aggregator::SharedTotals;
use crate::error::Result;

/// Outcome of draining one line source through a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    pub counts: TallyCounts,
    pub lines: usize,
}

/// Submit one tally task per line and collect the totals once all have run.
///
/// Each task owns its line. The pool is drained before this returns, on
/// success and on a read failure alike, so no task outlives the call.
///
/// # Errors
///
/// Returns the source's error if a line cannot be read. Lines submitted
/// before the failure still run, but their totals are discarded.
pub fn dispatch<S, P>(source: &mut S, pool: &P, targets: &Arc<TargetWordSet>) -> Result<Dispatched>
where
    S: LineSource + ?Sized,
    P: WorkerPool + ?Sized,
{
    let totals = Arc::new(SharedTotals::new());
    let mut lines = 0usize;

    let read = loop {
        match source.next_line() {
            Ok(Some(line)) => {
                lines += 1;
                let totals = Arc::clone(&totals);
                let targets = Arc::clone(targets);
                pool.submit(Box::new(move || {
                    let partial = tally_line(&line, &targets);
                    totals.merge(&partial);
                }));
            }
            Ok(None) => break Ok(()),
            Err(e) => break Err(e),
        }
    };

    pool.wait();
    log::debug!("{lines} line task(s) from {} drained", source.origin());
    read?;

    let totals = Arc::try_unwrap(totals).map_err(|still_shared| {
        ApplicationError::TotalsStillShared {
            holders: Arc::strong_count(&still_shared) - 1,
        }
    })?;

    Ok(Dispatched {
        counts: totals.into_counts(),
        lines,
    })
}
