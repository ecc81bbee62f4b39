//! Configuration and per-request template context.
//!
//! A [`Configuration`] is created once at startup from a configuration
//! directory: it is the sandbox root for `file://` resources, the place where
//! style files are looked up by name, and the holder of the built-in default
//! styles. A [`Template`] is the per-request view: the styles registered by
//! the active report template plus a shared reference to the configuration.
//!
//! Style resolution is total by construction: [`Configuration::new`] seeds
//! the default raster style, so [`Configuration::default_style`] can always
//! answer. A configuration that could not seed its defaults never exists —
//! the failure surfaces at startup, not at request time.

use cartopress_resource::sandbox;
use cartopress_style::{RASTER_STYLE_NAME, RasterStyle};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while building a [`Configuration`]. Startup-fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration directory '{}' is not usable: {source}", .path.display())]
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Configuration path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Process-wide print configuration.
#[derive(Debug)]
pub struct Configuration {
    /// Canonical absolute path of the configuration directory.
    directory: PathBuf,
    default_styles: HashMap<String, Arc<RasterStyle>>,
}

impl Configuration {
    /// Create a configuration rooted at `directory`.
    ///
    /// The directory is canonicalized once here; every later sandbox check
    /// compares against this canonical root. Seeds the built-in default
    /// raster style under [`RASTER_STYLE_NAME`].
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let requested = directory.as_ref();
        let directory = requested.canonicalize().map_err(|source| ConfigError::Directory {
            path: requested.to_path_buf(),
            source,
        })?;
        if !directory.is_dir() {
            return Err(ConfigError::NotADirectory(directory));
        }

        let mut default_styles = HashMap::new();
        default_styles.insert(
            RASTER_STYLE_NAME.to_string(),
            Arc::new(RasterStyle::default()),
        );
        Ok(Self {
            directory,
            default_styles,
        })
    }

    /// Canonical absolute path of the configuration directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Register an additional default style under `name`.
    pub fn register_default_style(&mut self, name: impl Into<String>, style: RasterStyle) {
        self.default_styles.insert(name.into(), Arc::new(style));
    }

    /// The default style registered under `name`.
    ///
    /// Falls back to the built-in raster style for unknown names, so the
    /// result is never absent.
    pub fn default_style(&self, name: &str) -> Arc<RasterStyle> {
        self.default_styles
            .get(name)
            .cloned()
            .unwrap_or_else(|| Arc::new(RasterStyle::default()))
    }

    /// Load a style by name from the configuration directory.
    ///
    /// The reference maps to `<directory>/<reference>.json` (the suffix is
    /// appended unless the reference already carries an extension) and goes
    /// through the same sandbox resolution as data files. Any failure —
    /// unresolvable path, unreadable file, invalid style document — is a miss,
    /// not an error: the resolution chain falls through to the default style.
    pub fn load_style(&self, reference: &str) -> Option<Arc<RasterStyle>> {
        let file_name = if Path::new(reference).extension().is_some() {
            reference.to_string()
        } else {
            format!("{reference}.json")
        };

        let path = match sandbox::resolve_in_root(&self.directory, &file_name) {
            Ok(path) => path,
            Err(err) => {
                log::debug!("no loadable style file for '{}': {}", reference, err);
                return None;
            }
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                log::debug!("style file '{}' is unreadable: {}", path.display(), err);
                return None;
            }
        };

        match serde_json::from_str::<RasterStyle>(&contents) {
            Ok(style) => {
                log::debug!("loaded style '{}' from {}", reference, path.display());
                Some(Arc::new(style))
            }
            Err(err) => {
                log::warn!(
                    "style file '{}' is not a valid raster style: {}",
                    path.display(),
                    err
                );
                None
            }
        }
    }
}

/// Per-request template context.
///
/// Holds the styles registered by the active report template and a shared
/// reference to the process-wide configuration.
#[derive(Debug, Clone)]
pub struct Template {
    configuration: Arc<Configuration>,
    styles: HashMap<String, Arc<RasterStyle>>,
}

impl Template {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            configuration,
            styles: HashMap::new(),
        }
    }

    /// Register a named style on this template.
    pub fn register_style(&mut self, name: impl Into<String>, style: RasterStyle) {
        self.styles.insert(name.into(), Arc::new(style));
    }

    /// Look up a style registered on this template.
    pub fn style(&self, name: &str) -> Option<Arc<RasterStyle>> {
        self.styles.get(name).cloned()
    }

    pub fn configuration(&self) -> &Arc<Configuration> {
        &self.configuration
    }
}
