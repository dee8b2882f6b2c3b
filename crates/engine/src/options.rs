/// How submitted line tasks are executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PoolKind {
    /// Fixed-size pool of worker threads.
    #[default]
    Parallel,
    /// Every task runs on the dispatching thread as soon as it is submitted.
    Inline,
}
