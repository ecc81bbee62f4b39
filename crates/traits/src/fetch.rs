//! RemoteClient trait for abstracting remote resource fetching.
//!
//! This trait allows the pipeline to fetch remote resources (geotiff files,
//! legend icons, etc.) without being tied to a concrete HTTP client.

use std::fmt::Debug;
use thiserror::Error;

/// Error type for remote fetch operations.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to fetch '{url}': {message}")]
    Failed { url: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err.to_string())
    }
}

/// A trait for fetching remote resources by URL.
///
/// This abstraction allows the pipeline to fetch from:
/// - HTTP(S) servers
/// - Pre-populated in-memory stores (for tests)
///
/// All fetches are blocking; timeout and transport policy belong to the
/// concrete implementation.
///
/// # Implementations
///
/// - `UreqClient`: fetches over HTTP(S) (in `cartopress-resource`)
/// - `InMemoryRemoteClient`: serves pre-populated bytes (always available)
pub trait RemoteClient: Send + Sync + Debug {
    /// Fetch the full body of the resource at `url`.
    ///
    /// # Returns
    ///
    /// The resource bytes, or an error if the resource is unreachable or the
    /// server signals a failure. No retries are attempted.
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;

    /// Returns a human-readable name for this client (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory remote client.
///
/// Resources are stored in memory and must be pre-populated before use.
/// This is the simplest client and is intended for tests.
#[derive(Debug, Default)]
pub struct InMemoryRemoteClient {
    resources: std::sync::RwLock<std::collections::HashMap<String, Vec<u8>>>,
}

impl InMemoryRemoteClient {
    pub fn new() -> Self {
        Self {
            resources: std::sync::RwLock::new(std::collections::HashMap::new()),
        }
    }

    /// Register a resource under a URL.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Failed` if the internal lock is poisoned.
    pub fn add(&self, url: impl Into<String>, body: Vec<u8>) -> Result<(), FetchError> {
        let url_string = url.into();
        let mut resources = self.resources.write().map_err(|_| FetchError::Failed {
            url: url_string.clone(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources.insert(url_string, body);
        Ok(())
    }

    /// Remove a resource from the store.
    ///
    /// Returns `None` if the lock is poisoned or the resource doesn't exist.
    pub fn remove(&self, url: &str) -> Option<Vec<u8>> {
        self.resources.write().ok()?.remove(url)
    }

    /// Get the number of registered resources.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the store is empty.
    ///
    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.resources.read().map(|r| r.is_empty()).unwrap_or(true)
    }
}

impl RemoteClient for InMemoryRemoteClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resources = self.resources.read().map_err(|_| FetchError::Failed {
            url: url.to_string(),
            message: "resource store lock poisoned".to_string(),
        })?;
        resources
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryRemoteClient"
    }
}
