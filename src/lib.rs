//! cartopress — print/report generation core for map layers and legends.
//!
//! Turns declarative JSON descriptors into renderable domain objects:
//!
//! - layer descriptors are offered to an ordered recognizer chain and
//!   resolved into [`RasterLayer`] values (style fallback chain, sandboxed
//!   or downloaded data source, shared worker pool reference);
//! - legend descriptors are flattened depth-first into a [`LegendTable`]
//!   for the tabular report engine.
//!
//! [`PrintPipeline`] wires the pieces together for the common case; the
//! individual crates remain usable on their own.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::PrintPipeline;

// Foundation re-exports
pub use cartopress_executor::{Executor, WorkerPool};
pub use cartopress_layer::{
    GeoTiffSource, GeotiffLayerPlugin, LayerFactoryPlugin, RasterLayer, parse_layer, resolve_style,
};
pub use cartopress_legend::{
    LEGEND_COLUMNS, LegendNode, LegendRow, LegendTable, flatten, flatten_json,
};
pub use cartopress_resource::{LocalResource, ResourceFetcher, UreqClient};
pub use cartopress_style::{ChannelSelection, RASTER_STYLE_NAME, RasterStyle};
pub use cartopress_template::{Configuration, Template};
pub use cartopress_traits::{InMemoryRemoteClient, RemoteClient};
