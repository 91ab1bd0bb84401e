//! Schema catalog: the read-only lookup tables a reader is configured with.
//!
//! The catalog is loaded once from the cached schema map file and never
//! mutated afterwards; readers share it behind an `Arc`.

use std::path::{Path, PathBuf};

use tracing::debug;

use vrpt_model::{AttributeOrder, PropertyDecode, SchemaMap};

use crate::error::StandardsError;
use crate::hash::schema_fingerprint;
use crate::schema_file::{SCHEMA_TAG, SCHEMA_VERSION, SchemaMapFile};

#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    pub schema_map: SchemaMap,
    pub attribute_order: AttributeOrder,
    pub property_decode: PropertyDecode,
    /// File the catalog was loaded from, if any.
    pub source: Option<PathBuf>,
    /// SHA-256 of the loaded bytes.
    pub sha256: Option<String>,
}

impl SchemaCatalog {
    /// Assemble a catalog from tables built in memory.
    pub fn from_parts(
        schema_map: SchemaMap,
        attribute_order: AttributeOrder,
        property_decode: PropertyDecode,
    ) -> Self {
        Self {
            schema_map,
            attribute_order,
            property_decode,
            source: None,
            sha256: None,
        }
    }

    /// Load and validate a schema map file.
    pub fn load(path: &Path) -> Result<Self, StandardsError> {
        let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
        let file: SchemaMapFile =
            serde_json::from_slice(&bytes).map_err(|source| StandardsError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        let mut catalog = Self::from_file(file)?;
        let digest = schema_fingerprint(&bytes);
        debug!(
            path = %path.display(),
            sha256 = %digest,
            categories = catalog.schema_map.registered_categories().count(),
            attributes = catalog.schema_map.attribute_count(),
            ranks = catalog.attribute_order.len(),
            "loaded schema map"
        );
        catalog.source = Some(path.to_path_buf());
        catalog.sha256 = Some(digest);
        Ok(catalog)
    }

    /// Parse a schema map from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, StandardsError> {
        let file: SchemaMapFile =
            serde_json::from_str(text).map_err(|source| StandardsError::Json {
                path: PathBuf::from("<memory>"),
                source,
            })?;
        let mut catalog = Self::from_file(file)?;
        catalog.sha256 = Some(schema_fingerprint(text.as_bytes()));
        Ok(catalog)
    }

    fn from_file(file: SchemaMapFile) -> Result<Self, StandardsError> {
        if file.schema != SCHEMA_TAG {
            return Err(StandardsError::InvalidSchemaMap {
                message: format!("expected schema {SCHEMA_TAG:?}, found {:?}", file.schema),
            });
        }
        if file.schema_version != SCHEMA_VERSION {
            return Err(StandardsError::UnsupportedVersion {
                found: file.schema_version,
                expected: SCHEMA_VERSION,
            });
        }

        let mut schema_map = SchemaMap::new();
        for (source, canonical) in file.categories {
            if source.trim().is_empty() || canonical.trim().is_empty() {
                return Err(StandardsError::InvalidSchemaMap {
                    message: format!("empty category translation {source:?} -> {canonical:?}"),
                });
            }
            schema_map.insert_category(source, canonical);
        }
        for entry in file.attributes {
            if entry.category.trim().is_empty()
                || entry.attribute.trim().is_empty()
                || entry.name.trim().is_empty()
            {
                return Err(StandardsError::InvalidSchemaMap {
                    message: format!(
                        "empty name in attribute entry {:?}.{:?} -> {:?}",
                        entry.category, entry.attribute, entry.name
                    ),
                });
            }
            if !schema_map.insert_attribute(&entry.category, &entry.attribute, entry.name) {
                return Err(StandardsError::DuplicateAttribute {
                    category: entry.category,
                    attribute: entry.attribute,
                });
            }
        }

        Ok(Self::from_parts(
            schema_map,
            file.attribute_order.into_iter().collect(),
            file.property_decode.into_iter().collect(),
        ))
    }
}
