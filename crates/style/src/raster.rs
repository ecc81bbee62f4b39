//! Defines the raster style structure applied to grid coverage layers.

use serde::{Deserialize, Serialize};

/// Which channels of the raster are rendered.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ChannelSelection {
    /// Render the red/green/blue bands as-is.
    #[default]
    Rgb,
    /// Collapse the raster to a single gray band.
    Grayscale,
}

/// A concrete style for rendering raster data.
///
/// Deserialized from JSON style files in the configuration directory or
/// registered programmatically on a template. Every field has a default, so
/// `{}` is a valid style document.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RasterStyle {
    /// Layer opacity in `[0.0, 1.0]`.
    pub opacity: f32,
    /// Gamma correction applied during rendering; 1.0 leaves values untouched.
    pub gamma: f32,
    pub channels: ChannelSelection,
}

impl Default for RasterStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            gamma: 1.0,
            channels: ChannelSelection::Rgb,
        }
    }
}
