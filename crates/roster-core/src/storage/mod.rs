//! Storage abstractions for Roster.
//!
//! Defines the named-slot store the registry persists through.
//! Implementations live in roster-infra.

pub mod slot_store;
