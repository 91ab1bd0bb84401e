//! Container serialization.
//!
//! - **mmCIF**: the canonical interchange output ([`CifWriter`])
//! - **JSON**: the same tables for tooling ([`JsonWriter`])

use std::fmt;
use std::path::Path;

use anyhow::Result;

use vrpt_model::DataContainer;

mod cif;
mod common;
mod json;

pub use cif::{CifToken, CifWriter, format_value, render_cif};
pub use common::ensure_parent_dir;
pub use json::{JsonWriter, render_json};

/// Output formats a container can be written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Cif,
    Json,
}

impl OutputFormat {
    /// `.json` outputs are JSON, everything else mmCIF.
    pub fn from_path(path: &Path) -> Self {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json { Self::Json } else { Self::Cif }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cif => "mmcif",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializer for finished containers.
pub trait ContainerWriter: Send + Sync {
    fn format(&self) -> OutputFormat;

    fn write_containers(&self, path: &Path, containers: &[DataContainer]) -> Result<()>;
}

/// Writer for the given format.
pub fn writer_for(format: OutputFormat) -> Box<dyn ContainerWriter> {
    match format {
        OutputFormat::Cif => Box::new(CifWriter),
        OutputFormat::Json => Box::new(JsonWriter),
    }
}
