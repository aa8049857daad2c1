//! Metrics collection and exposition.
//!
//! # Metrics
//! - `route_sync_attempts_total` (counter): sync attempts by outcome
//! - `route_sync_failures_total` (counter): failures by reason
//! - `route_table_routes` (gauge): routes in the published table
//! - `route_table_version` (gauge): version of the published table

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint available"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_sync_success(route_count: usize, version: u64) {
    metrics::counter!("route_sync_attempts_total", "outcome" => "success").increment(1);
    metrics::gauge!("route_table_routes").set(route_count as f64);
    metrics::gauge!("route_table_version").set(version as f64);
}

pub fn record_sync_failure(reason: &'static str) {
    metrics::counter!("route_sync_attempts_total", "outcome" => "failure").increment(1);
    metrics::counter!("route_sync_failures_total", "reason" => reason).increment(1);
}
