//! Observability subsystem.
//!
//! # Responsibilities
//! - Expose a Prometheus-compatible metrics endpoint
//! - Track request counts and latencies per route
//!
//! Logging lives in `main` (tracing-subscriber with `EnvFilter`); this
//! module owns only the metrics side. Nothing recorded here may contain a
//! request body, a query string, or any of the server-held secrets.

pub mod metrics;
