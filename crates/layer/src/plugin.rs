//! Recognizer chain for layer descriptors.

use crate::{LayerError, RasterLayer};
use cartopress_template::Template;
use serde_json::Value;

/// A recognizer for one kind of layer descriptor.
///
/// `parse` inspects the descriptor and answers one of three ways:
///
/// - `Ok(None)` — the descriptor is not for this recognizer; the caller
///   tries the next one in the chain;
/// - `Ok(Some(layer))` — the descriptor matched and the layer was built;
/// - `Err(_)` — the descriptor matched but building the layer failed
///   (style/resource resolution, reader opening). This aborts the chain.
pub trait LayerFactoryPlugin: Send + Sync {
    /// Returns a human-readable name for this recognizer (for logging).
    fn name(&self) -> &'static str;

    fn parse(
        &self,
        template: &Template,
        layer_json: &Value,
    ) -> Result<Option<RasterLayer>, LayerError>;
}

/// Offer `layer_json` to each recognizer in order; first match wins.
///
/// Returns `Ok(None)` when no recognizer in the chain accepts the
/// descriptor.
pub fn parse_layer(
    plugins: &[Box<dyn LayerFactoryPlugin>],
    template: &Template,
    layer_json: &Value,
) -> Result<Option<RasterLayer>, LayerError> {
    for plugin in plugins {
        if let Some(layer) = plugin.parse(template, layer_json)? {
            log::debug!("layer descriptor recognized by '{}'", plugin.name());
            return Ok(Some(layer));
        }
    }
    log::debug!("layer descriptor not recognized by any of {} plugins", plugins.len());
    Ok(None)
}
