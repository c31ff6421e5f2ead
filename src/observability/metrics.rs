//! Metrics collection and exposition.
//!
//! # Metrics
//! - `panel_requests_total` (counter): inbound requests by endpoint, status
//! - `panel_request_duration_seconds` (histogram): inbound latency by endpoint
//! - `panel_upstream_requests_total` (counter): outbound calls by upstream, outcome
//! - `panel_upstream_duration_seconds` (histogram): outbound latency by upstream
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one inbound request.
pub fn record_request(endpoint: &str, status: u16, start: Instant) {
    let endpoint = endpoint.to_string();
    metrics::counter!(
        "panel_requests_total",
        "endpoint" => endpoint.clone(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("panel_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}

/// Record one outbound call.
pub fn record_upstream(upstream: &'static str, outcome: &'static str, start: Instant) {
    metrics::counter!(
        "panel_upstream_requests_total",
        "upstream" => upstream,
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("panel_upstream_duration_seconds", "upstream" => upstream)
        .record(start.elapsed().as_secs_f64());
}
