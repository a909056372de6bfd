//! Tracing and observability module.
//!
//! Installs the global subscriber and OpenTelemetry tracer of the artist service.

/// Tracer configuration and initialization.
pub mod tracer;
