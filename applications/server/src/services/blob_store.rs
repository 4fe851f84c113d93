/// Blob store selection from configuration
use crate::{
    config::{BlobBackend, BlobSettings},
    error::{Result, ServerError},
};
use std::sync::Arc;
use wish_blob::{HttpBlobStore, LocalBlobStore};
use wish_core::BlobStore;

/// Build the configured blob store, creating the local root if needed
pub async fn blob_store_from_config(settings: &BlobSettings) -> Result<Arc<dyn BlobStore>> {
    match settings.backend {
        BlobBackend::Http => {
            let store = HttpBlobStore::new(settings.endpoint.clone(), settings.token.clone())
                .map_err(|e| ServerError::Config(e.to_string()))?;
            tracing::info!(endpoint = %store.endpoint(), "Using HTTP blob store");
            Ok(Arc::new(store))
        }
        BlobBackend::Local => {
            let store =
                LocalBlobStore::new(settings.local_root.clone(), settings.public_base_url.clone());
            store
                .initialize()
                .await
                .map_err(|e| ServerError::Config(e.to_string()))?;
            tracing::info!(root = %store.root().display(), "Using local blob store");
            Ok(Arc::new(store))
        }
    }
}
