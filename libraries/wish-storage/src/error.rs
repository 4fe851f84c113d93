/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Stored row could not be mapped back to a record
    #[error("Corrupt row {id}: {reason}")]
    CorruptRow { id: String, reason: String },

    /// Record refused before reaching the database
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create a corrupt row error
    pub fn corrupt(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CorruptRow {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

impl From<StorageError> for wish_core::WishError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidRecord(msg) => wish_core::WishError::invalid_input(msg),
            other => wish_core::WishError::storage(other.to_string()),
        }
    }
}
