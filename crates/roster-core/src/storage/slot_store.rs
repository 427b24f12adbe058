//! Named text slot store trait.
//!
//! A slot is a single durable text value addressed by a fixed key. The
//! registry serializes its whole record list into one slot and overwrites it
//! wholesale on every mutation.

use roster_types::error::RepositoryError;

/// Trait for durable named-slot storage.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in roster-infra.
pub trait SlotStore: Send + Sync {
    /// Read the slot's text. Returns None if the slot was never written.
    fn read(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, RepositoryError>> + Send;

    /// Replace the slot's text. A reader observes either the old or the new
    /// value, never a partial write.
    fn write(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
