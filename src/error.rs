use thiserror::Error;

/// Failure of a record provider call. Surfaced to the view model as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("no catalog source configured")]
    NoSource,

    #[error("failed to load catalog: {0}")]
    Load(String),

    #[error("recipe #{0} not found")]
    NotFound(u64),

    #[error("malformed recipe #{id}: {reason}")]
    Detail { id: u64, reason: String },
}

impl From<anyhow::Error> for ProviderError {
    fn from(e: anyhow::Error) -> Self {
        // Keep the whole context chain, not just the outermost message.
        ProviderError::Load(format!("{e:#}"))
    }
}

/// Why a single record was dropped during ingestion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("record has no id")]
    MissingId,

    #[error("record #{id} has no title")]
    MissingTitle { id: u64 },

    #[error("record is not a recipe object: {0}")]
    Shape(String),
}
