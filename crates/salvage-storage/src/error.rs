use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("assessment not found: {key}")]
    NotFound { key: String },

    #[error("assessment already stored: {key}")]
    AlreadyExists { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
