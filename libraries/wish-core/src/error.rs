//! Core error types for Wish Maker

use thiserror::Error;

/// Result type alias using `WishError`
pub type Result<T> = std::result::Result<T, WishError>;

/// Core error type for Wish Maker
#[derive(Error, Debug)]
pub enum WishError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Blob upload errors
    #[error("Blob error: {0}")]
    Blob(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WishError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a blob error
    pub fn blob(msg: impl Into<String>) -> Self {
        Self::Blob(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
