//! Metrics collection and exposition.
//!
//! # Metrics
//! - `vault_requests_total` (counter): requests by method, status, path
//! - `vault_request_duration_seconds` (histogram): latency by path
//!
//! Labels carry the route path and never the query string; outbound query
//! strings contain the API key.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
///
/// Failure to install is logged and otherwise ignored; the proxy serves
/// traffic with or without an exporter.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Prometheus exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Prometheus exporter");
        }
    }
}

/// Record one finished request.
pub fn record_request(method: &str, status: u16, path: &str, start: Instant) {
    metrics::counter!(
        "vault_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "path" => path.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "vault_request_duration_seconds",
        "path" => path.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
