//! End-to-end layer descriptor parsing through the pipeline facade.

use cartopress::{
    Configuration, InMemoryRemoteClient, PipelineError, PrintPipeline, RasterStyle,
};
use serde_json::json;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

fn pipeline_for(dir: &std::path::Path) -> PrintPipeline {
    let configuration = Arc::new(Configuration::new(dir).unwrap());
    PrintPipeline::with_client(configuration, Arc::new(InMemoryRemoteClient::new())).unwrap()
}

#[test]
fn geotiff_descriptor_inside_config_dir_succeeds() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data/x.tif"), b"tiff bytes").unwrap();

    let pipeline = pipeline_for(dir.path());
    let template = pipeline.template();

    let layer = pipeline
        .parse_layer(&template, &json!({"type": "geotiff", "url": "file://data/x.tif"}))
        .unwrap()
        .expect("descriptor should be recognized");

    let canonical_root = dir.path().canonicalize().unwrap();
    assert!(layer.source().path().starts_with(&canonical_root));
    assert_eq!(*layer.style().as_ref(), RasterStyle::default());
}

#[test]
fn escaping_descriptor_fails_with_security_error() {
    let dir = tempdir().unwrap();
    let pipeline = pipeline_for(dir.path());
    let template = pipeline.template();

    let result =
        pipeline.parse_layer(&template, &json!({"type": "geotiff", "url": "file://../x.tif"}));
    match result {
        Err(PipelineError::Layer(err)) => {
            assert!(err.to_string().contains("not within the configuration directory"))
        }
        other => panic!("expected a layer error, got {:?}", other.map(|l| l.is_some())),
    }
}

#[test]
fn unrecognized_descriptor_is_not_an_error() {
    let dir = tempdir().unwrap();
    let pipeline = pipeline_for(dir.path());
    let template = pipeline.template();

    let result = pipeline
        .parse_layer(&template, &json!({"type": "wms", "url": "http://example.com/wms"}))
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn layers_share_the_pipeline_pool() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.tif"), b"a").unwrap();
    fs::write(dir.path().join("b.tif"), b"b").unwrap();

    let pipeline = pipeline_for(dir.path());
    let template = pipeline.template();

    let first = pipeline
        .parse_layer(&template, &json!({"type": "geotiff", "url": "file://a.tif"}))
        .unwrap()
        .unwrap();
    let second = pipeline
        .parse_layer(&template, &json!({"type": "geotiff", "url": "file://b.tif"}))
        .unwrap()
        .unwrap();

    assert!(Arc::ptr_eq(first.pool(), pipeline.pool()));
    assert!(Arc::ptr_eq(first.pool(), second.pool()));
}

#[test]
fn template_styles_take_priority_over_config_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("x.tif"), b"t").unwrap();
    fs::write(dir.path().join("custom.json"), r#"{"opacity": 0.3}"#).unwrap();

    let pipeline = pipeline_for(dir.path());
    let mut template = pipeline.template();
    template.register_style(
        "custom",
        RasterStyle {
            opacity: 0.8,
            ..RasterStyle::default()
        },
    );

    let layer = pipeline
        .parse_layer(
            &template,
            &json!({"type": "geotiff", "url": "file://x.tif", "style": "custom"}),
        )
        .unwrap()
        .unwrap();
    assert_eq!(layer.style().opacity, 0.8);
}

#[test]
fn missing_config_dir_fails_at_startup() {
    let dir = tempdir().unwrap();
    let result = PrintPipeline::new(dir.path().join("does-not-exist"));
    assert!(matches!(result, Err(PipelineError::Config(_))));
}
