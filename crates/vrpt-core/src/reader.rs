//! End-to-end conversion of one validation report.
//!
//! Parse, flatten, build categories, assemble the container, then decode the
//! provenance properties. The schema catalog is shared and never mutated, so
//! one reader can serve any number of independent conversions.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use vrpt_ingest::{DocumentParser, XmlDocumentParser};
use vrpt_model::{Category, DEFAULT_CONTAINER_NAME, DataContainer, Document};
use vrpt_output::{CifWriter, ContainerWriter, OutputFormat};
use vrpt_standards::SchemaCatalog;

use crate::assembly::assemble_container;
use crate::category::{CategoryOutcome, build_category};
use crate::error::Result;
use crate::flatten::flatten_document;
use crate::provenance::resolve_provenance;
use crate::rules::ConversionRules;

pub struct ValidationReportReader {
    catalog: Arc<SchemaCatalog>,
    parser: Box<dyn DocumentParser>,
    writer: Box<dyn ContainerWriter>,
    rules: ConversionRules,
    container_name: String,
}

impl ValidationReportReader {
    /// Reader with the XML parser, the mmCIF writer and default rules.
    pub fn new(catalog: Arc<SchemaCatalog>) -> Self {
        Self {
            catalog,
            parser: Box::new(XmlDocumentParser),
            writer: Box::new(CifWriter),
            rules: ConversionRules::default(),
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
        }
    }

    /// Load the schema map at `path` and build a default reader on it.
    pub fn open(path: &Path) -> Result<Self> {
        let catalog = SchemaCatalog::load(path)?;
        Ok(Self::new(Arc::new(catalog)))
    }

    pub fn with_parser(mut self, parser: Box<dyn DocumentParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_writer(mut self, writer: Box<dyn ContainerWriter>) -> Self {
        self.writer = writer;
        self
    }

    pub fn with_rules(mut self, rules: ConversionRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_container_name(mut self, name: impl Into<String>) -> Self {
        self.container_name = name.into();
        self
    }

    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &ConversionRules {
        &self.rules
    }

    pub fn output_format(&self) -> OutputFormat {
        self.writer.format()
    }

    /// Parse and convert the report at `path`.
    pub fn read(&self, path: &Path) -> Result<DataContainer> {
        let start = Instant::now();
        let document = self.parser.parse(path)?;
        debug!(
            path = %path.display(),
            duration_ms = start.elapsed().as_millis(),
            "parsed validation report"
        );
        self.read_document(&document)
    }

    /// Convert an already parsed report.
    pub fn read_document(&self, document: &Document) -> Result<DataContainer> {
        let start = Instant::now();
        let schema = &self.catalog.schema_map;
        let flattened = flatten_document(document, &self.rules.flatten);

        let mut categories = Vec::with_capacity(flattened.len());
        let mut skipped = 0usize;
        for table in flattened.into_tables() {
            match build_category(
                table,
                schema,
                &self.catalog.attribute_order,
                &self.rules.category,
            )? {
                CategoryOutcome::Built(category) => categories.push(category),
                CategoryOutcome::Skipped(_) => skipped += 1,
            }
        }

        let mut container = assemble_container(&self.container_name, categories);
        let decoded = resolve_provenance(
            &mut container,
            schema,
            &self.catalog.property_decode,
            &self.rules.provenance,
        )?;

        info!(
            source = %document.source,
            container = %container.name,
            categories = container.len(),
            skipped,
            rows = container
                .categories()
                .iter()
                .map(Category::row_count)
                .sum::<usize>(),
            provenance_rows = decoded,
            duration_ms = start.elapsed().as_millis(),
            "converted validation report"
        );
        Ok(container)
    }

    /// Read `input` and write the container to `output`.
    ///
    /// Read failures are errors. A writer failure is logged and reported as
    /// `Ok(false)`.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<bool> {
        let container = self.read(input)?;
        Ok(self.write(&container, output))
    }

    /// Hand `container` to the configured writer; false when it fails.
    pub fn write(&self, container: &DataContainer, output: &Path) -> bool {
        match self
            .writer
            .write_containers(output, std::slice::from_ref(container))
        {
            Ok(()) => {
                info!(
                    output = %output.display(),
                    format = %self.writer.format(),
                    "wrote container"
                );
                true
            }
            Err(error) => {
                warn!(
                    output = %output.display(),
                    format = %self.writer.format(),
                    error = %format!("{error:#}"),
                    "failed to write container"
                );
                false
            }
        }
    }
}
