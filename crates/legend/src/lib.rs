//! Legend flattening.
//!
//! A legend descriptor is a tree of named groups, each with optional icon
//! URLs and child groups. The tabular report engine consumes flat rows, so
//! the tree is flattened depth-first in pre-order: every node contributes a
//! name-row, then one icon-row per icon URL (fetched and decoded), then its
//! children's rows at the next level.
//!
//! Flattening is all-or-nothing: the first icon that fails to fetch or
//! decode aborts the whole call and no partial legend is returned.

mod table;

pub use table::{ICON_COLUMN, LEGEND_COLUMNS, LEVEL_COLUMN, LegendTable, NAME_COLUMN};

use cartopress_traits::{FetchError, RemoteClient};
use image::DynamicImage;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Error type for legend flattening.
#[derive(Error, Debug)]
pub enum LegendError {
    #[error("Legend descriptor is invalid: {0}")]
    Descriptor(#[from] serde_json::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to decode icon '{url}': {source}")]
    Decode {
        url: String,
        source: image::ImageError,
    },
}

/// One node of the legend tree, as described by the request JSON.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LegendNode {
    pub name: String,
    #[serde(default)]
    pub icons: Vec<String>,
    #[serde(default)]
    pub classes: Vec<LegendNode>,
}

/// One output row: either a name-row or an icon-row, never both.
#[derive(Debug, Clone)]
pub struct LegendRow {
    name: Option<String>,
    icon: Option<DynamicImage>,
    level: u32,
}

impl LegendRow {
    fn name_row(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: Some(name.into()),
            icon: None,
            level,
        }
    }

    fn icon_row(icon: DynamicImage, level: u32) -> Self {
        Self {
            name: None,
            icon: Some(icon),
            level,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn icon(&self) -> Option<&DynamicImage> {
        self.icon.as_ref()
    }

    /// Depth of the originating node; the legend root is level 0.
    pub fn level(&self) -> u32 {
        self.level
    }
}

/// Flatten a legend tree into the ordered row table.
///
/// Rows come out in pre-order: each node's name-row, then its icon-rows in
/// icon-list order, then each child's rows in child-list order at the next
/// level. Icons are fetched through `client` and decoded in memory.
pub fn flatten(root: &LegendNode, client: &dyn RemoteClient) -> Result<LegendTable, LegendError> {
    let mut rows = Vec::new();
    fill(root, client, &mut rows, 0)?;
    log::debug!("flattened legend '{}' into {} rows", root.name, rows.len());
    Ok(LegendTable::new(rows))
}

/// Flatten a legend descriptor still in JSON form.
pub fn flatten_json(legend: &Value, client: &dyn RemoteClient) -> Result<LegendTable, LegendError> {
    let root: LegendNode = serde_json::from_value(legend.clone())?;
    flatten(&root, client)
}

fn fill(
    node: &LegendNode,
    client: &dyn RemoteClient,
    rows: &mut Vec<LegendRow>,
    level: u32,
) -> Result<(), LegendError> {
    rows.push(LegendRow::name_row(&node.name, level));

    for url in &node.icons {
        let bytes = client.get(url)?;
        let icon = image::load_from_memory(&bytes).map_err(|source| LegendError::Decode {
            url: url.clone(),
            source,
        })?;
        rows.push(LegendRow::icon_row(icon, level));
    }

    for class in &node.classes {
        fill(class, client, rows, level + 1)?;
    }
    Ok(())
}
