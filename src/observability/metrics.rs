//! Metrics collection and exposition.
//!
//! # Metrics
//! - `dispatch_requests_total` (counter): requests by verb and outcome
//!   (ok, fail, not_found, forbidden)
//! - `dispatch_duration_seconds` (histogram): dispatch latency by verb
//!
//! # Design Decisions
//! - Low-overhead updates; labels limited to verb and outcome
//! - The Prometheus exporter serves its own listener, outside the engine

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
///
/// Must be called from within a Tokio runtime. Failure to install is logged
/// and otherwise ignored; the engine runs fine without an exporter.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one dispatched request.
pub fn record_dispatch(verb: &str, outcome: &'static str, start: Instant) {
    metrics::counter!(
        "dispatch_requests_total",
        "verb" => verb.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("dispatch_duration_seconds", "verb" => verb.to_string())
        .record(start.elapsed().as_secs_f64());
}
