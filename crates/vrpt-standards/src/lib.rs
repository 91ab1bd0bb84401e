#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod hash;
pub mod paths;
pub mod schema_file;

pub use crate::catalog::SchemaCatalog;
pub use crate::error::StandardsError;
pub use crate::paths::{SCHEMA_MAP_ENV_VAR, default_schema_map_path, resolve_schema_map_path};
pub use crate::schema_file::{AttributeEntry, SCHEMA_TAG, SCHEMA_VERSION, SchemaMapFile};
