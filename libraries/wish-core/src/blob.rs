//! Blob storage trait for uploaded images

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A blob written to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredBlob {
    /// Publicly resolvable URL
    pub url: String,

    /// Path of the blob inside the store
    pub pathname: String,
}

/// Object storage for image bytes
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write `data` under `pathname` and return where it can be fetched.
    ///
    /// Errors are returned as-is; callers get no retry.
    async fn put(&self, pathname: &str, data: Bytes, content_type: &str) -> Result<StoredBlob>;
}
