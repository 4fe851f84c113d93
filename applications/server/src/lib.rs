//! Wish Server Library
//!
//! Birthday wish web application: a form that collects a name, birth date and
//! photos, a celebratory display page, an admin listing, and the JSON API
//! behind them.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod services;
pub mod state;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::{BlobBackend, ServerConfig};
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::SubmissionService;
pub use state::AppState;
