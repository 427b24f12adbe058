//! Configuration types for Roster.
//!
//! `RosterConfig` represents the optional `config.toml` in the data
//! directory. Every field has a default so an empty or missing file works.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Where the contractor slot is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend holding the slot.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Name of the slot holding the serialized contractor list.
    #[serde(default = "default_slot_key")]
    pub slot_key: String,
}

fn default_slot_key() -> String {
    "contractors".to_string()
}

impl StorageConfig {
    /// Check that `slot_key` is a plain name: ASCII letters, digits, `-` or
    /// `_`. The file backend uses it as a file stem inside the data directory.
    pub fn validate(&self) -> Result<(), String> {
        let key = &self.slot_key;
        if key.is_empty() {
            return Err("storage.slot_key must not be empty".to_string());
        }
        if let Some(c) = key
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(format!("storage.slot_key '{key}' contains '{c}'"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            slot_key: default_slot_key(),
        }
    }
}

/// Available slot storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per slot in the data directory.
    #[default]
    File,
    /// A `storage_slots` table in `roster.db`.
    Sqlite,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::File => write!(f, "file"),
            StorageBackend::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// CSV export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Prefix of the generated `<prefix>_<YYYY-MM-DD>.csv` file name.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

fn default_file_prefix() -> String {
    "contractors".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
        }
    }
}
