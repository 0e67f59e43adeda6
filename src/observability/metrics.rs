//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): inbound requests by method, route, status
//! - `http_request_duration_seconds` (histogram): inbound latency
//! - `downstream_requests_total` (counter): outbound calls by downstream, outcome
//! - `downstream_request_duration_seconds` (histogram): outbound latency
//!
//! Without an installed recorder every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one inbound request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record one outbound call.
pub fn record_downstream(downstream: &str, outcome: &'static str, start: Instant) {
    counter!(
        "downstream_requests_total",
        "downstream" => downstream.to_string(),
        "outcome" => outcome
    )
    .increment(1);
    histogram!(
        "downstream_request_duration_seconds",
        "downstream" => downstream.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Middleware recording inbound request metrics, labelled by route template.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    record_request(&method, &route, response.status().as_u16(), start);
    response
}
