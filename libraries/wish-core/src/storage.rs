//! Storage trait for user records

use crate::error::Result;
use crate::types::{NewRecord, RecordId, UserRecord};
use async_trait::async_trait;

/// Persistent store for user records
///
/// Records are append-only: the trait offers no update or delete.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a new record, assigning its ID and creation time
    async fn create(&self, record: NewRecord) -> Result<UserRecord>;

    /// All records, newest first
    async fn list_all(&self) -> Result<Vec<UserRecord>>;

    /// Get a record by ID
    async fn get(&self, id: &RecordId) -> Result<Option<UserRecord>>;

    /// Number of stored records
    async fn count(&self) -> Result<u64>;
}
