//! Resource resolution for the print pipeline.
//!
//! A layer descriptor references its data by URL. This crate resolves such a
//! URL to a readable local file:
//!
//! - `file://` URLs are resolved against the configuration directory and
//!   guarded by a sandbox check (see [`sandbox`]);
//! - every other scheme is treated as remote and downloaded into a uniquely
//!   named temporary file.
//!
//! The result is a [`LocalResource`], which owns the temporary file (if any)
//! and removes it from disk when dropped.

pub mod sandbox;

mod client;
mod remote;

pub use client::UreqClient;

use cartopress_traits::{FetchError, RemoteClient};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// URL scheme resolved against the configuration directory.
pub const FILE_SCHEME: &str = "file";

/// Error type for resource resolution.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Invalid resource url: {0}")]
    InvalidUrl(String),

    #[error("The url is a file url but indicates a file that is not within the configuration directory: {}", .path.display())]
    SandboxViolation { path: PathBuf },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A resolved, locally readable resource.
///
/// `Downloaded` owns its temporary file: the file is deleted when the
/// resource is dropped, so whoever holds the `LocalResource` (typically a
/// raster layer) also owns the cleanup.
#[derive(Debug)]
pub enum LocalResource {
    /// A file inside the configuration directory (canonical absolute path).
    Sandboxed(PathBuf),
    /// A remote resource downloaded into a temporary file.
    Downloaded(NamedTempFile),
}

impl LocalResource {
    /// Absolute path of the backing file.
    pub fn path(&self) -> &Path {
        match self {
            LocalResource::Sandboxed(path) => path,
            LocalResource::Downloaded(temp) => temp.path(),
        }
    }

    /// Open a reader handle over the backing file.
    pub fn open(&self) -> io::Result<File> {
        File::open(self.path())
    }

    /// Whether the backing file is a temporary download.
    pub fn is_temporary(&self) -> bool {
        matches!(self, LocalResource::Downloaded(_))
    }
}

/// Resolves resource URLs to local files for one configuration root.
pub struct ResourceFetcher<'a> {
    client: &'a dyn RemoteClient,
    root: &'a Path,
}

impl<'a> ResourceFetcher<'a> {
    /// Creates a fetcher resolving `file://` URLs against `root`.
    pub fn new(client: &'a dyn RemoteClient, root: &'a Path) -> Self {
        Self { client, root }
    }

    /// Resolve `url` to a readable local resource.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::InvalidUrl`] if the URL has no scheme;
    /// - [`ResourceError::SandboxViolation`] if a `file://` URL resolves
    ///   outside the configuration directory (the file is never opened);
    /// - [`ResourceError::Fetch`] / [`ResourceError::Io`] if a remote
    ///   download fails. No retries are attempted.
    pub fn fetch(&self, url: &str) -> Result<LocalResource, ResourceError> {
        let (scheme, _) = url
            .split_once("://")
            .ok_or_else(|| ResourceError::InvalidUrl(url.to_string()))?;

        if scheme.eq_ignore_ascii_case(FILE_SCHEME) {
            // Strip "<scheme>://" and resolve the remainder inside the root.
            let remainder = &url[scheme.len() + "://".len()..];
            let path = sandbox::resolve_in_root(self.root, remainder)?;
            log::debug!("resolved '{}' to sandboxed file {}", url, path.display());
            Ok(LocalResource::Sandboxed(path))
        } else {
            log::info!("downloading remote resource from '{}'", url);
            let temp = remote::download_to_temp(self.client, url)?;
            Ok(LocalResource::Downloaded(temp))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartopress_traits::InMemoryRemoteClient;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_fetch_sandboxed_file() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("data")).unwrap();
        fs::write(dir.path().join("data/x.tif"), b"tiff bytes").unwrap();

        let client = InMemoryRemoteClient::new();
        let fetcher = ResourceFetcher::new(&client, dir.path());
        let resource = fetcher.fetch("file://data/x.tif").unwrap();

        assert!(!resource.is_temporary());
        assert!(resource.path().is_absolute());
        assert!(resource.path().starts_with(dir.path().canonicalize().unwrap()));
        assert_eq!(fs::read(resource.path()).unwrap(), b"tiff bytes");
    }

    #[test]
    fn test_fetch_blocks_traversal() {
        let dir = tempdir().unwrap();
        let client = InMemoryRemoteClient::new();
        let fetcher = ResourceFetcher::new(&client, dir.path());

        let result = fetcher.fetch("file://../x.tif");
        match result {
            Err(ResourceError::SandboxViolation { path }) => assert!(path.is_absolute()),
            other => panic!("expected sandbox violation, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_scheme_is_case_insensitive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("x.tif"), b"t").unwrap();

        let client = InMemoryRemoteClient::new();
        let fetcher = ResourceFetcher::new(&client, dir.path());
        assert!(fetcher.fetch("FILE://x.tif").is_ok());
    }

    #[test]
    fn test_fetch_remote_downloads_to_temp() {
        let dir = tempdir().unwrap();
        let client = InMemoryRemoteClient::new();
        client
            .add("http://example.com/x.tif", b"remote bytes".to_vec())
            .unwrap();

        let fetcher = ResourceFetcher::new(&client, dir.path());
        let resource = fetcher.fetch("http://example.com/x.tif").unwrap();

        assert!(resource.is_temporary());
        assert_eq!(fs::read(resource.path()).unwrap(), b"remote bytes");
    }

    #[test]
    fn test_fetch_remote_failure_is_hard() {
        let dir = tempdir().unwrap();
        let client = InMemoryRemoteClient::new();
        let fetcher = ResourceFetcher::new(&client, dir.path());

        let result = fetcher.fetch("http://example.com/missing.tif");
        assert!(matches!(result, Err(ResourceError::Fetch(_))));
    }

    #[test]
    fn test_fetch_rejects_url_without_scheme() {
        let dir = tempdir().unwrap();
        let client = InMemoryRemoteClient::new();
        let fetcher = ResourceFetcher::new(&client, dir.path());

        let result = fetcher.fetch("data/x.tif");
        assert!(matches!(result, Err(ResourceError::InvalidUrl(_))));
    }

    #[test]
    fn test_temp_file_removed_on_drop() {
        let dir = tempdir().unwrap();
        let client = InMemoryRemoteClient::new();
        client.add("http://example.com/x.tif", b"x".to_vec()).unwrap();

        let fetcher = ResourceFetcher::new(&client, dir.path());
        let resource = fetcher.fetch("http://example.com/x.tif").unwrap();
        let temp_path = resource.path().to_path_buf();
        assert!(temp_path.exists());

        drop(resource);
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_local_resource_open() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("r.bin"), b"contents").unwrap();

        let client = InMemoryRemoteClient::new();
        let fetcher = ResourceFetcher::new(&client, dir.path());
        let resource = fetcher.fetch("file://r.bin").unwrap();

        use std::io::Read;
        let mut contents = String::new();
        resource.open().unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "contents");
    }
}
