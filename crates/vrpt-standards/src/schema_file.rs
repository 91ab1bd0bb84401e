#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const SCHEMA_TAG: &str = "vrpt.schema-map";
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk layout of the cached schema map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaMapFile {
    pub schema: String,
    pub schema_version: u32,
    #[serde(default)]
    pub categories: BTreeMap<String, String>,
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
    #[serde(default)]
    pub attribute_order: BTreeMap<String, u32>,
    #[serde(default)]
    pub property_decode: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeEntry {
    pub category: String,
    pub attribute: String,
    /// Canonical attribute name.
    pub name: String,
}
