//! Worker pool implementations for the print pipeline.
//!
//! Rendering work for raster layers is scheduled onto a process-wide worker
//! pool. The pool is created once at startup by the integration layer and
//! shared across every layer of every request; layers only hold an `Arc`
//! reference to it.
//!
//! ## Available pools
//!
//! - [`RayonExecutor`]: work-stealing thread pool (feature: `rayon`)
//! - [`SyncExecutor`]: sequential execution (re-exported from cartopress-traits)

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

// Re-export from cartopress-traits
pub use cartopress_traits::{Executor, ExecutorError, SyncExecutor};

/// A type-erased worker pool wrapping concrete executor implementations.
///
/// Since the `Executor` trait has generic methods, it cannot be used as a
/// trait object (`dyn Executor`). This enum provides a workaround by holding
/// concrete executor types and delegating method calls to them.
#[derive(Clone, Debug)]
pub enum WorkerPool {
    /// Sequential executor (no parallelism)
    Sync(SyncExecutor),

    /// Rayon work-stealing thread pool executor
    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl WorkerPool {
    /// A sequential pool running work on the calling thread.
    pub fn sync() -> Self {
        WorkerPool::Sync(SyncExecutor::new())
    }

    /// A work-stealing pool sized to the number of available cores.
    #[cfg(feature = "rayon")]
    pub fn rayon() -> Result<Self, ExecutorError> {
        Ok(WorkerPool::Rayon(RayonExecutor::new()?))
    }
}

impl Executor for WorkerPool {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        match self {
            WorkerPool::Sync(exec) => exec.execute_all(items, f),
            #[cfg(feature = "rayon")]
            WorkerPool::Rayon(exec) => exec.execute_all(items, f),
        }
    }

    fn execute_all_fallible<T, R, E, F>(&self, items: Vec<T>, f: F) -> Vec<Result<R, E>>
    where
        T: Send + 'static,
        R: Send + 'static,
        E: Send + 'static,
        F: Fn(T) -> Result<R, E> + Send + Sync + Clone + 'static,
    {
        match self {
            WorkerPool::Sync(exec) => exec.execute_all_fallible(items, f),
            #[cfg(feature = "rayon")]
            WorkerPool::Rayon(exec) => exec.execute_all_fallible(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            WorkerPool::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon")]
            WorkerPool::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            WorkerPool::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            WorkerPool::Rayon(exec) => exec.name(),
        }
    }
}
