//! User record queries

use crate::error::{Result, StorageError};
use chrono::{DateTime, NaiveDate};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use wish_core::types::{NewRecord, RecordId, UserRecord};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Insert a new record
///
/// Assigns a fresh ID and creation timestamp. Fields the schema would reject
/// are refused up front with `StorageError::InvalidRecord`.
pub async fn create(pool: &SqlitePool, new: NewRecord) -> Result<UserRecord> {
    new.check()
        .map_err(|e| StorageError::InvalidRecord(e.to_string()))?;

    let record = UserRecord::create(new);
    let images = serde_json::to_string(&record.images)?;

    sqlx::query(
        "INSERT INTO user_records (id, first_name, last_name, date_of_birth, images, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(record.id.as_str())
    .bind(&record.first_name)
    .bind(&record.last_name)
    .bind(record.date_of_birth.format(DATE_FORMAT).to_string())
    .bind(images)
    .bind(record.created_at.timestamp_millis())
    .execute(pool)
    .await?;

    Ok(record)
}

/// Get all records, newest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<UserRecord>> {
    let rows = sqlx::query(
        "SELECT id, first_name, last_name, date_of_birth, images, created_at
         FROM user_records
         ORDER BY created_at DESC, rowid DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(from_row).collect()
}

/// Get a record by ID
pub async fn get_by_id(pool: &SqlitePool, id: &RecordId) -> Result<Option<UserRecord>> {
    let row = sqlx::query(
        "SELECT id, first_name, last_name, date_of_birth, images, created_at
         FROM user_records WHERE id = ?",
    )
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(from_row).transpose()
}

/// Count stored records
pub async fn count(pool: &SqlitePool) -> Result<u64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_records")
        .fetch_one(pool)
        .await?;

    Ok(count as u64)
}

fn from_row(row: &SqliteRow) -> Result<UserRecord> {
    let id: String = row.try_get("id")?;

    let date_of_birth: String = row.try_get("date_of_birth")?;
    let date_of_birth = NaiveDate::parse_from_str(&date_of_birth, DATE_FORMAT)
        .map_err(|e| StorageError::corrupt(&id, format!("date_of_birth: {}", e)))?;

    let images: String = row.try_get("images")?;
    let images: Vec<String> = serde_json::from_str(&images)?;

    let created_at: i64 = row.try_get("created_at")?;
    let created_at = DateTime::from_timestamp_millis(created_at)
        .ok_or_else(|| StorageError::corrupt(&id, "created_at out of range"))?;

    Ok(UserRecord::with_id(
        RecordId::new(id),
        NewRecord {
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            date_of_birth,
            images,
        },
        created_at,
    ))
}
