//! HTTP request handlers for the REST API.

pub mod contractor;
pub mod stats;
