//! Request extractors for the REST API.

pub mod json;
pub mod query;
