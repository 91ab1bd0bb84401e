//! Schema map path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the schema map location.
pub const SCHEMA_MAP_ENV_VAR: &str = "VRPT_SCHEMA_MAP";

/// File name of the cached schema map under `schema/`.
pub const SCHEMA_MAP_FILE_NAME: &str = "vrpt_schema_map.json";

/// Get the default schema map path.
///
/// Resolution order:
/// 1. `VRPT_SCHEMA_MAP` environment variable
/// 2. `schema/vrpt_schema_map.json` relative to workspace root
pub fn default_schema_map_path() -> PathBuf {
    if let Ok(path) = std::env::var(SCHEMA_MAP_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../schema")
        .join(SCHEMA_MAP_FILE_NAME)
}

/// Use `explicit` when given, otherwise the default location.
pub fn resolve_schema_map_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(default_schema_map_path)
}
