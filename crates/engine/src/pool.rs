// crates/engine/src/pool.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_channel::{Receiver, Sender};
use word_tally_ports::{Job, WorkerPool};
use word_tally_shared_kernel::InfrastructureError;

use crate::config::Config;
use crate::error::Result;
use crate::options::PoolKind;

/// Fixed-size rayon pool with a completion barrier.
///
/// Every submitted job reports on a channel when it is done, and
/// [`wait`](WorkerPool::wait) receives one report per outstanding job. No
/// panic handler is installed, so a panicking job aborts the process rather
/// than leaving `wait` short of a report.
pub struct RayonPool {
    pool: rayon::ThreadPool,
    done_tx: Sender<()>,
    done_rx: Receiver<()>,
    outstanding: AtomicUsize,
}

impl RayonPool {
    /// Build a pool with `threads` workers.
    ///
    /// # Errors
    ///
    /// Returns an error if rayon cannot spawn the worker threads.
    pub fn new(threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("word-tally-{i}"))
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;
        let (done_tx, done_rx) = crossbeam_channel::unbounded();
        Ok(Self {
            pool,
            done_tx,
            done_rx,
            outstanding: AtomicUsize::new(0),
        })
    }
}

/// Signals completion when dropped at the end of the job.
struct Completion(Sender<()>);

impl Drop for Completion {
    fn drop(&mut self) {
        let _ = self.0.send(());
    }
}

impl WorkerPool for RayonPool {
    fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn submit(&self, job: Job) {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
        let completion = Completion(self.done_tx.clone());
        self.pool.spawn(move || {
            let _completion = completion;
            job();
        });
    }

    fn wait(&self) {
        let pending = self.outstanding.swap(0, Ordering::AcqRel);
        log::trace!("waiting for {pending} task(s)");
        for _ in 0..pending {
            // The pool keeps a sender alive, so this only ends on a report.
            if self.done_rx.recv().is_err() {
                break;
            }
        }
    }
}

/// Runs each job on the caller's thread at submission time.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlinePool;

impl WorkerPool for InlinePool {
    fn workers(&self) -> usize {
        1
    }

    fn submit(&self, job: Job) {
        job();
    }

    fn wait(&self) {}
}

/// Build the pool selected by `config`.
///
/// # Errors
///
/// Fails on invalid configuration or when the thread pool cannot be built.
pub fn build_pool(config: &Config) -> Result<Box<dyn WorkerPool>> {
    config.validate()?;
    match config.pool {
        PoolKind::Parallel => Ok(Box::new(RayonPool::new(config.jobs)?)),
        PoolKind::Inline => Ok(Box::new(InlinePool)),
    }
}
