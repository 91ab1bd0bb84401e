use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use vrpt_core::ValidationReportReader;
use vrpt_ingest::{OutlineEntry, outline, parse_file};
use vrpt_model::DataContainer;
use vrpt_output::{OutputFormat, writer_for};
use vrpt_standards::{SchemaCatalog, resolve_schema_map_path};

/// Result of one `convert` invocation.
#[derive(Debug)]
pub struct ConvertOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub schema_map: PathBuf,
    pub schema_sha256: Option<String>,
    pub container: DataContainer,
    /// False when the writer failed; the container was still built.
    pub written: bool,
}

pub fn load_catalog(schema_map: Option<&Path>) -> Result<(PathBuf, SchemaCatalog)> {
    let path = resolve_schema_map_path(schema_map);
    let catalog = SchemaCatalog::load(&path)
        .with_context(|| format!("load schema map {}", path.display()))?;
    Ok((path, catalog))
}

pub fn run_convert(
    input: &Path,
    output: &Path,
    schema_map: Option<&Path>,
    format: Option<OutputFormat>,
) -> Result<ConvertOutcome> {
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let (schema_path, catalog) = load_catalog(schema_map)?;
    let schema_sha256 = catalog.sha256.clone();
    let format = format.unwrap_or_else(|| OutputFormat::from_path(output));
    let reader = ValidationReportReader::new(Arc::new(catalog)).with_writer(writer_for(format));

    let container = reader
        .read(input)
        .with_context(|| format!("convert {}", input.display()))?;
    let written = reader.write(&container, output);

    info!(
        output = %output.display(),
        format = %format,
        categories = container.len(),
        written,
        duration_ms = start.elapsed().as_millis(),
        "convert finished"
    );
    Ok(ConvertOutcome {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        format,
        schema_map: schema_path,
        schema_sha256,
        container,
        written,
    })
}

pub fn run_inspect(input: &Path, depth: usize) -> Result<Vec<OutlineEntry>> {
    let document = parse_file(input).with_context(|| format!("parse {}", input.display()))?;
    Ok(outline(&document, depth))
}

pub fn run_categories(schema_map: Option<&Path>) -> Result<SchemaCatalog> {
    let (_, catalog) = load_catalog(schema_map)?;
    Ok(catalog)
}
