use thiserror::Error;

use vrpt_ingest::IngestError;
use vrpt_model::ModelError;
use vrpt_standards::StandardsError;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The report could not be read or parsed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The schema catalog could not be loaded.
    #[error(transparent)]
    Standards(#[from] StandardsError),

    /// An extracted attribute has no entry in the attribute order table.
    #[error("attribute {attribute} of category {category} has no rank in the attribute order table")]
    MissingAttributeRank { category: String, attribute: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
