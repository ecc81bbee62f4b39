//! Pipeline facade wiring configuration, transport, worker pool and plugins.

use crate::PipelineError;
use cartopress_executor::WorkerPool;
use cartopress_layer::{GeotiffLayerPlugin, LayerFactoryPlugin, RasterLayer, parse_layer};
use cartopress_legend::{LegendTable, flatten_json};
use cartopress_resource::UreqClient;
use cartopress_template::{Configuration, Template};
use cartopress_traits::RemoteClient;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

/// One report-generation pipeline.
///
/// Owns the process-wide pieces: the configuration (sandbox root and default
/// styles), the HTTP client, the shared worker pool, and the ordered layer
/// recognizer chain. Created once at startup; requests then run through
/// [`PrintPipeline::parse_layer`] and [`PrintPipeline::flatten_legend`].
pub struct PrintPipeline {
    configuration: Arc<Configuration>,
    client: Arc<dyn RemoteClient>,
    pool: Arc<WorkerPool>,
    plugins: Vec<Box<dyn LayerFactoryPlugin>>,
}

impl PrintPipeline {
    /// Build a pipeline rooted at `config_dir` with the HTTP transport.
    pub fn new(config_dir: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let configuration = Arc::new(Configuration::new(config_dir)?);
        Self::with_client(configuration, Arc::new(UreqClient::new()))
    }

    /// Build a pipeline with an explicit remote client (e.g. a test double).
    pub fn with_client(
        configuration: Arc<Configuration>,
        client: Arc<dyn RemoteClient>,
    ) -> Result<Self, PipelineError> {
        // The one worker pool for the whole process; layers only ever see
        // an Arc of it.
        #[cfg(feature = "rayon-executor")]
        let pool = Arc::new(WorkerPool::rayon()?);
        #[cfg(not(feature = "rayon-executor"))]
        let pool = Arc::new(WorkerPool::sync());

        let plugins: Vec<Box<dyn LayerFactoryPlugin>> = vec![Box::new(GeotiffLayerPlugin::new(
            Arc::clone(&client),
            Arc::clone(&pool),
        ))];

        log::info!(
            "print pipeline ready: config dir {}, client {}, {} layer plugins",
            configuration.directory().display(),
            client.name(),
            plugins.len()
        );
        Ok(Self {
            configuration,
            client,
            pool,
            plugins,
        })
    }

    /// A fresh per-request template context over this configuration.
    pub fn template(&self) -> Template {
        Template::new(Arc::clone(&self.configuration))
    }

    /// Offer a layer descriptor to the recognizer chain.
    ///
    /// `Ok(None)` means no recognizer accepted the descriptor.
    pub fn parse_layer(
        &self,
        template: &Template,
        layer_json: &Value,
    ) -> Result<Option<RasterLayer>, PipelineError> {
        Ok(parse_layer(&self.plugins, template, layer_json)?)
    }

    /// Flatten a legend descriptor into its row table.
    pub fn flatten_legend(&self, legend_json: &Value) -> Result<LegendTable, PipelineError> {
        Ok(flatten_json(legend_json, self.client.as_ref())?)
    }

    pub fn configuration(&self) -> &Arc<Configuration> {
        &self.configuration
    }

    /// The process-wide worker pool shared by every produced layer.
    pub fn pool(&self) -> &Arc<WorkerPool> {
        &self.pool
    }
}
