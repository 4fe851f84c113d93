//! Blob storage clients for Wish Maker.
//!
//! Uploaded images live outside the database. This crate writes them either
//! to an HTTP object store ([`HttpBlobStore`]) or to a local directory served
//! by the web server ([`LocalBlobStore`]), and names each blob so that
//! uploads never collide.
//!
//! # Example
//!
//! ```ignore
//! use wish_blob::{upload_images, HttpBlobStore};
//!
//! let store = HttpBlobStore::new("https://blob.vercel-storage.com", token)?;
//! let urls = upload_images(&store, &images).await?;
//! ```

mod error;
mod http;
mod local;
pub mod naming;
mod upload;

pub use error::{BlobError, Result};
pub use http::HttpBlobStore;
pub use local::LocalBlobStore;
pub use upload::{content_type_for, upload_images};
