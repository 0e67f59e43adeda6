//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router for the configured role
//! - Wire up middleware (request ID, tracing, timeout, metrics)
//! - Serve on a bound listener until shutdown is signalled

use std::time::Duration;

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    http::{Request, StatusCode},
    middleware,
    BoxError, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::aggregate::AggregatedResponse;
use crate::config::GatewayConfig;
use crate::downstream::DownstreamClient;
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::observability::metrics;
use crate::routing::build_routes;

/// HTTP server for one service role.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_client(config, DownstreamClient::new())
    }

    /// Create a server whose downstream calls go through `client`.
    pub fn with_client(config: GatewayConfig, client: DownstreamClient) -> Self {
        let routes = build_routes(&config, client);
        let router = Self::build_router(routes, config.timeouts.request());
        Self { router, config }
    }

    /// Wrap role routes with every middleware layer.
    fn build_router(routes: Router, request_timeout: Duration) -> Router {
        routes
            .route_layer(middleware::from_fn(metrics::track_requests))
            .layer(
                ServiceBuilder::new()
                    .layer(HandleErrorLayer::new(request_failed))
                    .layer(TimeoutLayer::new(request_timeout)),
            )
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request),
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            role = %self.config.role,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// JSON answer for requests aborted by the inbound timeout.
async fn request_failed(error: BoxError) -> AggregatedResponse {
    if error.is::<Elapsed>() {
        tracing::warn!("Request exceeded the inbound timeout");
        AggregatedResponse::error(StatusCode::REQUEST_TIMEOUT, "request timed out")
    } else {
        tracing::error!(error = %error, "Unhandled middleware error");
        AggregatedResponse::error(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
    }
}
