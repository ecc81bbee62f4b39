// src/error.rs
use cartopress_layer::LayerError;
use cartopress_legend::LegendError;
use cartopress_template::ConfigError;
use cartopress_traits::ExecutorError;
use thiserror::Error;

/// A comprehensive error type for the report generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration failed: {0}")]
    Config(#[from] ConfigError),

    #[error("Worker pool failed: {0}")]
    Executor(#[from] ExecutorError),

    #[error("Layer construction failed: {0}")]
    Layer(#[from] LayerError),

    #[error("Legend flattening failed: {0}")]
    Legend(#[from] LegendError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
