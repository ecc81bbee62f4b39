//! Raster style model for the print pipeline.
//!
//! Styles describe how a raster layer is rendered (opacity, gamma, channel
//! selection). Styles are referenced by name from layer descriptors and
//! resolved through a fallback chain that ends in [`RasterStyle::default`],
//! so a style is always available.

pub mod raster;

pub use raster::{ChannelSelection, RasterStyle};

/// Name under which the built-in default raster style is registered.
///
/// Layer descriptors that omit their `style` field resolve against this name.
pub const RASTER_STYLE_NAME: &str = "raster";
