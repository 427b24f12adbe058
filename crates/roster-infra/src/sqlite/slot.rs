//! SQLite slot store implementation.
//!
//! Implements `SlotStore` from `roster-core` on the `storage_slots` table.
//! A write is a single upsert statement, so readers never observe a partial
//! value.

use chrono::Utc;
use roster_core::storage::slot_store::SlotStore;
use roster_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `SlotStore`.
pub struct SqliteSlotStore {
    pool: DatabasePool,
}

impl SqliteSlotStore {
    /// Create a new slot store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl SlotStore for SqliteSlotStore {
    async fn read(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM storage_slots WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        row.map(|row| row.try_get::<String, _>("value"))
            .transpose()
            .map_err(|e| RepositoryError::Query(e.to_string()))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO storage_slots (key, value, created_at, updated_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT (key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }
}
