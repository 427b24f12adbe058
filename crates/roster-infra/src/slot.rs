//! Runtime selection between the slot storage backends.

use std::path::Path;

use roster_core::storage::slot_store::SlotStore;
use roster_types::config::{StorageBackend, StorageConfig};
use roster_types::error::RepositoryError;

use crate::filesystem::FileSlotStore;
use crate::sqlite::pool::DatabasePool;
use crate::sqlite::slot::SqliteSlotStore;

/// The slot store picked by `storage.backend` in `config.toml`.
pub enum SlotBackend {
    File(FileSlotStore),
    Sqlite(SqliteSlotStore),
}

impl SlotBackend {
    /// Open the configured backend rooted at `data_dir`, creating the
    /// directory if needed.
    pub async fn open(data_dir: &Path, config: &StorageConfig) -> Result<Self, RepositoryError> {
        tokio::fs::create_dir_all(data_dir)
            .await
            .map_err(|e| RepositoryError::Io(e.to_string()))?;

        let backend = match config.backend {
            StorageBackend::File => SlotBackend::File(FileSlotStore::new(data_dir)),
            StorageBackend::Sqlite => {
                let pool = DatabasePool::open_in(data_dir).await.map_err(|e| {
                    tracing::error!(error = %e, "failed to open sqlite database");
                    RepositoryError::Connection
                })?;
                SlotBackend::Sqlite(SqliteSlotStore::new(pool))
            }
        };

        tracing::debug!(backend = %config.backend, dir = %data_dir.display(), "slot backend opened");
        Ok(backend)
    }

    pub fn kind(&self) -> StorageBackend {
        match self {
            SlotBackend::File(_) => StorageBackend::File,
            SlotBackend::Sqlite(_) => StorageBackend::Sqlite,
        }
    }
}

impl SlotStore for SlotBackend {
    async fn read(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        match self {
            SlotBackend::File(store) => store.read(key).await,
            SlotBackend::Sqlite(store) => store.read(key).await,
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        match self {
            SlotBackend::File(store) => store.write(key, value).await,
            SlotBackend::Sqlite(store) => store.write(key, value).await,
        }
    }
}
