use crate::records;
use async_trait::async_trait;
use sqlx::SqlitePool;
use wish_core::{
    error::Result,
    storage::RecordStore,
    types::{NewRecord, RecordId, UserRecord},
};

/// Record store backed by `SQLite`
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn create(&self, record: NewRecord) -> Result<UserRecord> {
        Ok(records::create(&self.pool, record).await?)
    }

    async fn list_all(&self) -> Result<Vec<UserRecord>> {
        Ok(records::get_all(&self.pool).await?)
    }

    async fn get(&self, id: &RecordId) -> Result<Option<UserRecord>> {
        Ok(records::get_by_id(&self.pool, id).await?)
    }

    async fn count(&self) -> Result<u64> {
        Ok(records::count(&self.pool).await?)
    }
}
