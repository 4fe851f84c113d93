/// Server services
pub mod blob_store;
pub mod submission;

pub use blob_store::blob_store_from_config;
pub use submission::SubmissionService;
