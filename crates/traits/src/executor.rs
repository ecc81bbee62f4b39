//! Executor trait for abstracting the shared worker pool.
//!
//! Raster layers hold a reference to a process-wide worker pool for later
//! tile rendering. The pool is created once by the integration layer and
//! only ever forwarded; this trait is the seam between the two.

use std::fmt::Debug;
use thiserror::Error;

/// Error type for executor construction.
#[derive(Error, Debug, Clone)]
pub enum ExecutorError {
    #[error("Failed to build worker pool: {0}")]
    PoolBuild(String),
}

/// A trait for executing batches of independent work items.
///
/// Implementations decide the execution strategy (sequential, work-stealing
/// thread pool, ...). The trait has generic methods and therefore cannot be
/// used as a trait object; see the `WorkerPool` enum in
/// `cartopress-executor` for a type-erased wrapper.
pub trait Executor: Send + Sync + Debug {
    /// Execute `f` over every item, returning the results in input order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Execute a fallible `f` over every item, returning every outcome in
    /// input order. Failures do not abort the batch.
    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static;

    /// The number of work items this executor can run concurrently.
    fn parallelism(&self) -> usize;

    /// Returns a human-readable name for this executor (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Sequential executor: runs every item on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_executor_preserves_order() {
        let executor = SyncExecutor::new();
        let results = executor.execute_all(vec![1, 2, 3], |x| x * 2);
        assert_eq!(results, vec![2, 4, 6]);
    }

    #[test]
    fn test_sync_executor_fallible_keeps_failures() {
        let executor = SyncExecutor::new();
        let results = executor.execute_all_fallible(vec![1, 2, 3], |x| {
            if x == 2 { Err("two") } else { Ok(x) }
        });
        assert_eq!(results, vec![Ok(1), Err("two"), Ok(3)]);
    }

    #[test]
    fn test_sync_executor_parallelism() {
        assert_eq!(SyncExecutor::new().parallelism(), 1);
        assert_eq!(SyncExecutor::new().name(), "SyncExecutor");
    }
}
