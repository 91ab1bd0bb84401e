//! JSON output of converted containers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use vrpt_model::{Category, DataContainer};

use crate::common::ensure_parent_dir;
use crate::{ContainerWriter, OutputFormat};

/// Writes containers as pretty-printed JSON, columns in output order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter;

#[derive(Serialize)]
struct JsonDocument<'a> {
    containers: Vec<JsonContainer<'a>>,
}

#[derive(Serialize)]
struct JsonContainer<'a> {
    name: &'a str,
    categories: Vec<JsonCategory<'a>>,
}

#[derive(Serialize)]
struct JsonCategory<'a> {
    name: &'a str,
    source: &'a str,
    columns: Vec<&'a str>,
    rows: Vec<Vec<Option<&'a str>>>,
}

impl<'a> From<&'a Category> for JsonCategory<'a> {
    fn from(category: &'a Category) -> Self {
        Self {
            name: &category.name,
            source: &category.source_name,
            columns: category.column_names(),
            rows: (0..category.row_count())
                .map(|row| category.row_values(row))
                .collect(),
        }
    }
}

/// Render containers to a JSON value.
pub fn render_json(containers: &[DataContainer]) -> Result<serde_json::Value> {
    let document = JsonDocument {
        containers: containers
            .iter()
            .map(|container| JsonContainer {
                name: &container.name,
                categories: container.categories().iter().map(JsonCategory::from).collect(),
            })
            .collect(),
    };
    serde_json::to_value(&document).context("serialize containers")
}

impl ContainerWriter for JsonWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn write_containers(&self, path: &Path, containers: &[DataContainer]) -> Result<()> {
        ensure_parent_dir(path)?;
        let value = render_json(containers)?;
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &value)
            .with_context(|| format!("write {}", path.display()))?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        debug!(path = %path.display(), containers = containers.len(), "wrote JSON");
        Ok(())
    }
}
