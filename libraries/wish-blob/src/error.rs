//! Error types for blob uploads.

use thiserror::Error;

/// Errors that can occur when writing a blob.
#[derive(Error, Debug)]
pub enum BlobError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Object store rejected the upload
    #[error("Upload rejected ({status}): {message}")]
    Upload { status: u16, message: String },

    /// Failed to parse the object store response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid object store endpoint
    #[error("Invalid blob endpoint: {0}")]
    InvalidEndpoint(String),

    /// Pathname would escape the store
    #[error("Invalid blob path: {0}")]
    InvalidPath(String),

    /// IO error writing a local blob
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for blob operations.
pub type Result<T> = std::result::Result<T, BlobError>;

impl From<BlobError> for wish_core::WishError {
    fn from(err: BlobError) -> Self {
        wish_core::WishError::blob(err.to_string())
    }
}
