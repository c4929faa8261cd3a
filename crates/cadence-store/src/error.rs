use thiserror::Error;

/// Catalog persistence errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Catalog unreadable: {0}")]
    CatalogUnreadable(String),

    #[error("Catalog write failed: {0}")]
    WriteFailed(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Definition not found: {0}")]
    NotFound(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
