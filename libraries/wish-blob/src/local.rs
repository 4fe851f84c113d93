//! Local-disk blob store, served by the web server under a public prefix.

use crate::error::{BlobError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use wish_core::blob::{BlobStore, StoredBlob};

/// Blob store writing files below a root directory
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalBlobStore {
    /// Blobs are written below `root` and addressed as `{public_base_url}/{pathname}`.
    pub fn new(root: PathBuf, public_base_url: impl Into<String>) -> Self {
        Self {
            root,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create the root directory
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Directory blobs are written to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a pathname to a file below the root, refusing anything that could escape it
    pub fn resolve(&self, pathname: &str) -> Result<PathBuf> {
        let relative = Path::new(pathname);
        let mut components = relative.components().peekable();

        if components.peek().is_none() {
            return Err(BlobError::InvalidPath("empty pathname".to_string()));
        }
        if !components.all(|c| matches!(c, Component::Normal(_))) {
            return Err(BlobError::InvalidPath(format!(
                "Path traversal attempt detected: {}",
                pathname
            )));
        }

        Ok(self.root.join(relative))
    }

    /// Public URL for a stored pathname
    pub fn url_for(&self, pathname: &str) -> String {
        format!("{}/{}", self.public_base_url, pathname)
    }

    async fn write(&self, pathname: &str, data: &[u8]) -> Result<StoredBlob> {
        let path = self.resolve(pathname)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&path, data).await?;
        tracing::debug!(path = %path.display(), size = data.len(), "Blob written");

        Ok(StoredBlob {
            url: self.url_for(pathname),
            pathname: pathname.to_string(),
        })
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(
        &self,
        pathname: &str,
        data: Bytes,
        _content_type: &str,
    ) -> wish_core::Result<StoredBlob> {
        Ok(self.write(pathname, &data).await?)
    }
}
