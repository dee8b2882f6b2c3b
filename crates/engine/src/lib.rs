// crates/engine/src/lib.rs
use std::sync::Arc;

use serde::Serialize;
use word_tally_domain::{TallyCounts, TargetWordSet};
use word_tally_ports::LineSource;

pub mod aggregator;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod options;
pub mod pool;

use crate::config::Config;
use crate::error::Result;

/// Final numbers of one run, safe to read: every line task has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub counts: TallyCounts,
    /// Lines read from the source and dispatched as tasks.
    pub lines: usize,
    /// Workers that executed the tasks.
    pub workers: usize,
}

/// Run the tally engine over `source`.
///
/// Builds the pool described by `config`, dispatches one task per line and
/// returns once the pool has drained.
///
/// # Errors
///
/// Returns an error for invalid configuration, when the pool cannot be
/// built, or when the source fails mid-read. No partial totals are returned.
pub fn run<S>(config: &Config, source: &mut S) -> Result<RunReport>
where
    S: LineSource + ?Sized,
{
    let pool = pool::build_pool(config)?;
    let workers = pool.workers();
    let targets = Arc::new(TargetWordSet::standard());

    log::info!(
        "tallying {} with {workers} worker(s) ({:?} pool)",
        source.origin(),
        config.pool
    );

    let dispatched = dispatch::dispatch(source, pool.as_ref(), &targets)?;

    log::info!(
        "{} line(s), {} word(s) counted",
        dispatched.lines,
        dispatched.counts.total
    );

    Ok(RunReport {
        counts: dispatched.counts,
        lines: dispatched.lines,
        workers,
    })
}
