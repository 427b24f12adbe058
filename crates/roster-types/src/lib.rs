//! Shared domain types for Roster.
//!
//! This crate contains the domain types used across the workspace:
//! contractor records, view parameters, configuration, and error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod contractor;
pub mod error;
pub mod view;
