//! Work-stealing executor backed by a rayon thread pool.

use cartopress_traits::{Executor, ExecutorError};
use rayon::prelude::*;
use std::sync::Arc;

/// An executor running work on a dedicated rayon thread pool.
///
/// The pool is owned by this executor (not rayon's global pool) so the
/// integration layer controls its size and lifetime. Clones share the pool.
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    pool: Arc<rayon::ThreadPool>,
}

impl RayonExecutor {
    /// Build a pool sized to the number of available cores.
    pub fn new() -> Result<Self, ExecutorError> {
        Self::with_parallelism(None)
    }

    /// Build a pool with an explicit thread count.
    pub fn with_parallelism(threads: Option<usize>) -> Result<Self, ExecutorError> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = threads {
            builder = builder.num_threads(threads);
        }
        builder
            .build()
            .map(|pool| Self { pool: Arc::new(pool) })
            .map_err(|e| ExecutorError::PoolBuild(e.to_string()))
    }
}

impl Executor for RayonExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        self.pool.install(|| items.into_par_iter().map(f).collect())
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        self.pool.install(|| items.into_par_iter().map(f).collect())
    }

    fn parallelism(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}
