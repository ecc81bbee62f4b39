//! Map layer descriptor parsing.
//!
//! A report request carries a list of layer descriptors as JSON objects.
//! Each descriptor is offered to an ordered chain of recognizers
//! ([`LayerFactoryPlugin`]); the first recognizer that accepts the
//! descriptor produces the layer, the rest are never consulted. A
//! recognizer that does not match answers with an absence, not an error,
//! so the chain can move on.
//!
//! The one recognizer in this crate, [`GeotiffLayerPlugin`], turns
//! `{"type": "geotiff", "url": ..., "style": ...?}` descriptors into
//! [`RasterLayer`] values bound to the shared worker pool.

mod geotiff;
mod plugin;
mod style_resolver;

pub use geotiff::{GeoTiffSource, GeotiffLayerPlugin, RasterLayer};
pub use plugin::{LayerFactoryPlugin, parse_layer};
pub use style_resolver::resolve_style;

use cartopress_resource::ResourceError;
use thiserror::Error;

/// Error type for layer construction.
///
/// A failure here is a hard failure of the parse call; "descriptor not
/// recognized" is expressed as `Ok(None)`, never as an error.
#[derive(Error, Debug)]
pub enum LayerError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error("Failed to open raster source: {0}")]
    Io(#[from] std::io::Error),
}
