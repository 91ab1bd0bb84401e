#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema map {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid schema map: {message}")]
    InvalidSchemaMap { message: String },

    #[error("unsupported schema map version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("duplicate attribute entry in schema map: {category}.{attribute}")]
    DuplicateAttribute { category: String, attribute: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
