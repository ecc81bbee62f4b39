//! Geotiff layer recognizer.
//!
//! Reads a geotiff file from a URL: either a sandboxed file inside the
//! configuration directory or a remote resource downloaded to a temporary
//! file. Decoding the raster itself belongs to the rendering collaborator;
//! this module only resolves the bytes and binds them to a style and the
//! shared worker pool.

use crate::plugin::LayerFactoryPlugin;
use crate::style_resolver::resolve_style;
use crate::LayerError;
use cartopress_executor::WorkerPool;
use cartopress_resource::{LocalResource, ResourceFetcher};
use cartopress_style::{RASTER_STYLE_NAME, RasterStyle};
use cartopress_template::Template;
use cartopress_traits::RemoteClient;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// An opened geotiff data source.
///
/// Owns the resolved [`LocalResource`], so a downloaded temporary file lives
/// exactly as long as this source and is removed from disk when it drops.
#[derive(Debug)]
pub struct GeoTiffSource {
    resource: LocalResource,
    reader: BufReader<File>,
}

impl GeoTiffSource {
    /// Open a reader over the resolved resource.
    pub fn open(resource: LocalResource) -> std::io::Result<Self> {
        let file = resource.open()?;
        Ok(Self {
            resource,
            reader: BufReader::new(file),
        })
    }

    /// Absolute path of the backing file.
    pub fn path(&self) -> &Path {
        self.resource.path()
    }

    /// The reader handle for the rendering collaborator.
    pub fn reader(&mut self) -> &mut BufReader<File> {
        &mut self.reader
    }
}

/// A raster map layer awaiting rendering.
///
/// The worker pool is a non-owning reference to the process-wide pool; the
/// layer forwards it to the rendering stage but never manages it.
#[derive(Debug)]
pub struct RasterLayer {
    source: GeoTiffSource,
    style: Arc<RasterStyle>,
    pool: Arc<WorkerPool>,
}

impl RasterLayer {
    pub fn new(source: GeoTiffSource, style: Arc<RasterStyle>, pool: Arc<WorkerPool>) -> Self {
        Self {
            source,
            style,
            pool,
        }
    }

    pub fn style(&self) -> &Arc<RasterStyle> {
        &self.style
    }

    pub fn pool(&self) -> &Arc<WorkerPool> {
        &self.pool
    }

    pub fn source(&self) -> &GeoTiffSource {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut GeoTiffSource {
        &mut self.source
    }
}

/// Recognizer for `{"type": "geotiff", ...}` layer descriptors.
pub struct GeotiffLayerPlugin {
    client: Arc<dyn RemoteClient>,
    pool: Arc<WorkerPool>,
}

/// Descriptor type literal recognized by [`GeotiffLayerPlugin`].
const TYPE: &str = "geotiff";
const URL: &str = "url";
const STYLE: &str = "style";

impl GeotiffLayerPlugin {
    /// `client` fetches remote resources; `pool` is the externally owned
    /// worker pool every produced layer is bound to.
    pub fn new(client: Arc<dyn RemoteClient>, pool: Arc<WorkerPool>) -> Self {
        Self { client, pool }
    }
}

impl LayerFactoryPlugin for GeotiffLayerPlugin {
    fn name(&self) -> &'static str {
        TYPE
    }

    fn parse(
        &self,
        template: &Template,
        layer_json: &Value,
    ) -> Result<Option<RasterLayer>, LayerError> {
        let type_field = layer_json.get("type").and_then(Value::as_str);
        let url = layer_json.get(URL).and_then(Value::as_str);

        let (Some(type_field), Some(url)) = (type_field, url) else {
            return Ok(None);
        };
        if !type_field.eq_ignore_ascii_case(TYPE) {
            return Ok(None);
        }

        let style_ref = layer_json
            .get(STYLE)
            .and_then(Value::as_str)
            .unwrap_or(RASTER_STYLE_NAME);
        let style = resolve_style(template, style_ref);

        let configuration = template.configuration();
        let fetcher = ResourceFetcher::new(self.client.as_ref(), configuration.directory());
        let resource = fetcher.fetch(url)?;
        let source = GeoTiffSource::open(resource)?;

        Ok(Some(RasterLayer::new(
            source,
            style,
            Arc::clone(&self.pool),
        )))
    }
}
