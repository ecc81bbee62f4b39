//! Style resolution for raster layers.

use cartopress_style::{RASTER_STYLE_NAME, RasterStyle};
use cartopress_template::Template;
use std::sync::Arc;

/// Resolve a style reference through the fallback chain.
///
/// Tries, in order:
///
/// 1. a style registered under `reference` on the active template;
/// 2. a style file loaded by name from the configuration directory;
/// 3. the configuration's built-in default raster style.
///
/// The first step that produces a style short-circuits the rest. Step 3 is
/// guaranteed to answer, so this function is total: a "not found" at steps
/// 1 and 2 is a fall-through, never an error.
pub fn resolve_style(template: &Template, reference: &str) -> Arc<RasterStyle> {
    if let Some(style) = template.style(reference) {
        log::debug!("style '{}' found on template", reference);
        return style;
    }
    if let Some(style) = template.configuration().load_style(reference) {
        return style;
    }
    log::debug!("style '{}' unresolved, using default raster style", reference);
    template.configuration().default_style(RASTER_STYLE_NAME)
}
