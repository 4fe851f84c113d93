//! Wish Maker Storage
//!
//! `SQLite` persistence for submitted user records.
//!
//! Records are append-only: the crate offers create, list and lookup, and
//! nothing that rewrites or removes a row.
//!
//! # Example
//!
//! ```rust,no_run
//! use wish_storage::{create_pool, run_migrations, SqliteRecordStore};
//! use wish_core::storage::RecordStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://wish.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteRecordStore::new(pool);
//! let newest_first = store.list_all().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

pub mod records;

pub use context::SqliteRecordStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://wish.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating database pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("Database pool created");

    Ok(pool)
}
