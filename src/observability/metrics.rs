//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_invocations_total` (counter): invocations by operation, status
//! - `gateway_invocation_duration_seconds` (histogram): latency by operation
//!
//! Recording is a no-op until an exporter is installed.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter on `addr`. Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handler invocation.
pub fn record_invocation(operation: &str, status: u16, start: Instant) {
    metrics::counter!(
        "gateway_invocations_total",
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "gateway_invocation_duration_seconds",
        "operation" => operation.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
