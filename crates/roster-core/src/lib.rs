//! Business logic and storage trait definitions for Roster.
//!
//! This crate defines the `SlotStore` port that the infrastructure layer
//! implements, the contractor registry that owns the canonical record list,
//! and the pure view/export functions over it. It depends only on
//! `roster-types` -- never on `roster-infra` or any database/IO crate.

pub mod export;
pub mod registry;
pub mod storage;
pub mod view;
