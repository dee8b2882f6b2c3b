// crates/ports/src/worker_pool.rs

/// A zero-argument unit of work. It owns everything it touches.
pub type Job = Box<dyn FnOnce() + Send + 'static>;

/// Executes submitted jobs, each exactly once, on some worker.
///
/// No ordering is promised between jobs. [`wait`](WorkerPool::wait) is the
/// only point after which the effects of every job submitted so far are
/// guaranteed to be visible to the caller.
pub trait WorkerPool: Send + Sync {
    /// Number of workers executing jobs.
    fn workers(&self) -> usize;

    fn submit(&self, job: Job);

    /// Block until every job submitted before this call has finished.
    fn wait(&self);
}
