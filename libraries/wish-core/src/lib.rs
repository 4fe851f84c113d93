//! Wish Maker Core
//!
//! Domain types, validation rules and storage traits shared by every Wish Maker crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `NewRecord`, `RecordId`, `ImageFile`
//! - **Validation Schema**: required-field rules for a submission
//! - **Core Traits**: `RecordStore` (database) and `BlobStore` (image storage)
//! - **Error Handling**: Unified `WishError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use wish_core::validation::{validate, Field, SubmissionInput};
//!
//! let input = SubmissionInput {
//!     first_name: "Ali".to_string(),
//!     last_name: "Khan".to_string(),
//!     date_of_birth: "2000-05-10".to_string(),
//!     images: vec![],
//! };
//!
//! let errors = validate(input).unwrap_err();
//! assert_eq!(errors.get(Field::Images), Some("At least one image is required"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod age;
pub mod blob;
pub mod error;
pub mod storage;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use blob::{BlobStore, StoredBlob};
pub use error::{Result, WishError};
pub use storage::RecordStore;
pub use types::{ImageFile, NewRecord, RecordId, UserRecord};
