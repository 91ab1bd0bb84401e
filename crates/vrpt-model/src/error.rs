use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("category {category} has no column {column}")]
    UnknownColumn { category: String, column: String },
    #[error("row {row} out of range for category {category} ({row_count} rows)")]
    RowOutOfRange {
        category: String,
        row: usize,
        row_count: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
