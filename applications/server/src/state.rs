/// Shared application state
use crate::services::SubmissionService;
use std::sync::Arc;
use wish_core::{BlobStore, RecordStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub submissions: Arc<SubmissionService>,
    pub admin_password: Arc<str>,
}

impl AppState {
    pub fn new(
        records: Arc<dyn RecordStore>,
        blobs: Arc<dyn BlobStore>,
        admin_password: impl Into<String>,
    ) -> Self {
        Self {
            submissions: Arc::new(SubmissionService::new(records, blobs)),
            admin_password: Arc::from(admin_password.into()),
        }
    }
}
