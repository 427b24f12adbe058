//! Observability setup for Roster: the global tracing subscriber and an
//! optional OpenTelemetry bridge.

pub mod tracing_setup;
