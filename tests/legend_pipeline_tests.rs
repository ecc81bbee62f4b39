//! End-to-end legend flattening through the pipeline facade.

use cartopress::{Configuration, InMemoryRemoteClient, PipelineError, PrintPipeline};
use image::DynamicImage;
use serde_json::json;
use std::sync::Arc;
use tempfile::tempdir;

fn png_bytes() -> Vec<u8> {
    let image = DynamicImage::new_rgba8(4, 4);
    let mut bytes = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn pipeline_with(client: InMemoryRemoteClient) -> PrintPipeline {
    let dir = tempdir().unwrap();
    let configuration = Arc::new(Configuration::new(dir.path()).unwrap());
    PrintPipeline::with_client(configuration, Arc::new(client)).unwrap()
}

#[test]
fn legend_with_icon_and_child_flattens_in_order() {
    let client = InMemoryRemoteClient::new();
    client.add("http://x/i1.png", png_bytes()).unwrap();
    let pipeline = pipeline_with(client);

    let table = pipeline
        .flatten_legend(&json!({
            "name": "A",
            "icons": ["http://x/i1.png"],
            "classes": [{"name": "B"}]
        }))
        .unwrap();

    assert_eq!(table.columns(), &["name", "icon", "level"]);

    let rows = table.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!((rows[0].name(), rows[0].level()), (Some("A"), 0));
    assert!(rows[1].icon().is_some());
    assert_eq!(rows[1].level(), 0);
    assert_eq!((rows[2].name(), rows[2].level()), (Some("B"), 1));
}

#[test]
fn decoded_icons_keep_their_dimensions() {
    let client = InMemoryRemoteClient::new();
    client.add("http://x/icon.png", png_bytes()).unwrap();
    let pipeline = pipeline_with(client);

    let table = pipeline
        .flatten_legend(&json!({"name": "L", "icons": ["http://x/icon.png"]}))
        .unwrap();

    let icon = table.rows()[1].icon().unwrap();
    assert_eq!((icon.width(), icon.height()), (4, 4));
}

#[test]
fn missing_icon_fails_the_whole_legend() {
    let pipeline = pipeline_with(InMemoryRemoteClient::new());

    let result = pipeline.flatten_legend(&json!({
        "name": "A",
        "icons": ["http://x/unreachable.png"]
    }));
    assert!(matches!(result, Err(PipelineError::Legend(_))));
}

#[test]
fn deep_legend_levels_follow_nesting() {
    let pipeline = pipeline_with(InMemoryRemoteClient::new());

    let table = pipeline
        .flatten_legend(&json!({
            "name": "root",
            "classes": [
                {"name": "a", "classes": [{"name": "a1"}, {"name": "a2"}]},
                {"name": "b"}
            ]
        }))
        .unwrap();

    let rows: Vec<(Option<&str>, u32)> =
        table.rows().iter().map(|r| (r.name(), r.level())).collect();
    assert_eq!(
        rows,
        vec![
            (Some("root"), 0),
            (Some("a"), 1),
            (Some("a1"), 2),
            (Some("a2"), 2),
            (Some("b"), 1),
        ]
    );
}
