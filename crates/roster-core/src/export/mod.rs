//! Export formats for the displayed contractor list.

pub mod csv;
