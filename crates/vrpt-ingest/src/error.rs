//! Error types for report ingestion.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while reading a report document.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open the input file.
    #[error("failed to open file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed while reading bytes (includes corrupt gzip streams).
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// The XML itself is malformed.
    #[error("malformed XML in {path}: {message}")]
    Xml { path: PathBuf, message: String },

    /// An element was still open when the input ended.
    #[error("unexpected end of {path}: element <{tag}> is not closed")]
    UnclosedElement { path: PathBuf, tag: String },

    /// The input has no root element.
    #[error("no root element in {path}")]
    EmptyDocument { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
