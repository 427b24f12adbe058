//! Infrastructure layer for Roster.
//!
//! Contains implementations of the storage trait defined in `roster-core`
//! (file-per-slot and SQLite backends), data directory resolution, and the
//! `config.toml` loader.

pub mod config;
pub mod filesystem;
pub mod slot;
pub mod sqlite;
