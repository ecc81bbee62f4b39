//! Flattens a small legend and prints the resulting table.
//!
//! Run with: `cargo run --example legend_report`

use cartopress::PrintPipeline;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config_dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let pipeline = PrintPipeline::new(&config_dir)?;

    let legend = json!({
        "name": "Land cover",
        "classes": [
            {"name": "Forest", "classes": [{"name": "Deciduous"}, {"name": "Coniferous"}]},
            {"name": "Water"}
        ]
    });

    let table = pipeline.flatten_legend(&legend)?;
    println!("{:?}", table.columns());
    for row in table.rows() {
        println!(
            "{:indent$}{} (level {})",
            "",
            row.name().unwrap_or("<icon>"),
            row.level(),
            indent = (row.level() * 2) as usize
        );
    }
    Ok(())
}
