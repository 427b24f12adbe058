//! Filesystem adapters for Roster.
//!
//! Implements the `SlotStore` trait from `roster-core` as one JSON file per
//! slot, and resolves the data directory everything else lives in.

use std::io::Write;
use std::path::{Path, PathBuf};

use roster_core::storage::slot_store::SlotStore;
use roster_types::error::RepositoryError;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ROSTER_DATA_DIR";

/// File-per-slot implementation of the `SlotStore` trait.
///
/// Slot `key` lives at `{dir}/{key}.json`. Each write goes to its own
/// uniquely named temp file in the same directory, which is then renamed over
/// the target. Readers see either the old or the new value, even with several
/// processes writing the same slot.
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SlotStore for FileSlotStore {
    async fn read(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        match tokio::fs::read_to_string(self.slot_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(RepositoryError::Io(err.to_string())),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let dir = self.dir.clone();
        let target = self.slot_path(key);
        let prefix = format!(".{key}.");
        let value = value.to_owned();

        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            std::fs::create_dir_all(&dir)?;
            let mut tmp = tempfile::Builder::new()
                .prefix(&prefix)
                .suffix(".tmp")
                .tempfile_in(&dir)?;
            tmp.write_all(value.as_bytes())?;
            tmp.as_file().sync_all()?;
            tmp.persist(&target).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::Io(e.to_string()))?
        .map_err(|e| RepositoryError::Io(e.to_string()))
    }
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `ROSTER_DATA_DIR` environment variable
/// 2. `~/.roster`
/// 3. `.roster` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".roster");
    }

    PathBuf::from(".roster")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_and_read_slot() {
        let dir = tempdir().unwrap();
        let store = FileSlotStore::new(dir.path());

        store.write("contractors", "[]").await.unwrap();
        assert_eq!(store.read("contractors").await.unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("contractors.json").exists());
    }

    #[tokio::test]
    async fn test_read_missing_slot_is_none() {
        let dir = tempdir().unwrap();
        let store = FileSlotStore::new(dir.path());
        assert!(store.read("contractors").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileSlotStore::new(&nested);

        store.write("contractors", "x").await.unwrap();
        assert_eq!(std::fs::read_to_string(nested.join("contractors.json")).unwrap(), "x");
    }

    #[tokio::test]
    async fn test_overwrite_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let store = FileSlotStore::new(dir.path());

        store.write("contractors", "first").await.unwrap();
        store.write("contractors", "second").await.unwrap();

        assert_eq!(store.read("contractors").await.unwrap().as_deref(), Some("second"));
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries, vec!["contractors.json"]);
    }

    #[tokio::test]
    async fn test_concurrent_writers_never_leave_partial_value() {
        let dir = tempdir().unwrap();
        let payloads: Vec<String> = (0..16).map(|i| format!("[{}]", i.to_string().repeat(4096))).collect();

        let mut handles = Vec::new();
        for payload in payloads.clone() {
            let store = FileSlotStore::new(dir.path());
            handles.push(tokio::spawn(async move { store.write("contractors", &payload).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let store = FileSlotStore::new(dir.path());
        let stored = store.read("contractors").await.unwrap().unwrap();
        assert!(payloads.contains(&stored));
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(entries, vec!["contractors.json"]);
    }

    #[tokio::test]
    async fn test_write_fails_when_dir_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a dir").unwrap();

        let store = FileSlotStore::new(&blocker);
        let err = store.write("contractors", "[]").await.unwrap_err();
        assert!(matches!(err, RepositoryError::Io(_)));
    }

    #[test]
    fn test_slot_path() {
        let store = FileSlotStore::new("/home/user/.roster");
        assert_eq!(
            store.slot_path("contractors"),
            PathBuf::from("/home/user/.roster/contractors.json")
        );
    }

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var(DATA_DIR_ENV, "/tmp/test-roster");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-roster"));
        unsafe {
            std::env::remove_var(DATA_DIR_ENV);
        }
    }
}
