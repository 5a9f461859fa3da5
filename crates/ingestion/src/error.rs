//! Error types for the ingestion crate.

use quantity::QuantityError;
use thiserror::Error;

/// Errors that can occur during ingestion.
///
/// An unclassifiable shape is not an error: the raw array is handed back
/// as [`Ingested::Raw`](crate::Ingested::Raw).
#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("Unsupported rank: array has {ndim} dimensions, at most {max} are supported")]
    UnsupportedRank { ndim: usize, max: usize },

    #[error("Field allocation or copy failed: {0}")]
    Quantity(#[from] QuantityError),

    #[error("Malformed serialized record: {0}")]
    Serialized(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to ingest '{name}': {source}")]
    Variable {
        name: String,
        #[source]
        source: Box<IngestionError>,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl IngestionError {
    /// Attach the dataset variable name to an error.
    pub fn for_variable(name: impl Into<String>, err: IngestionError) -> Self {
        Self::Variable {
            name: name.into(),
            source: Box::new(err),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestionError>;
