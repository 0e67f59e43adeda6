//! Composite health reporting.
//!
//! # Responsibilities
//! - Report the local service as `ok` (answering at all proves liveness)
//! - Probe every downstream's `/health` concurrently
//! - Embed a healthy downstream's body verbatim, anything else as unavailable
//!
//! # Design Decisions
//! - Always 200: a degraded dependency is reported, never raised
//! - Probes are independent; the slowest one bounds the response time

use axum::http::StatusCode;
use futures_util::future::join_all;
use serde_json::{json, Map, Value};

use crate::aggregate::AggregatedResponse;
use crate::downstream::{DownstreamClient, DownstreamResult, DownstreamTarget};

/// Path probed on every downstream.
pub const HEALTH_PATH: &str = "/health";

/// Builds the composite `/health` payload of an aggregating service.
#[derive(Debug, Clone)]
pub struct HealthComposer {
    service: String,
    client: DownstreamClient,
    targets: Vec<DownstreamTarget>,
}

impl HealthComposer {
    pub fn new(service: impl Into<String>, client: DownstreamClient, targets: Vec<DownstreamTarget>) -> Self {
        Self {
            service: service.into(),
            client,
            targets,
        }
    }

    pub async fn health(&self) -> AggregatedResponse {
        let probes = self
            .targets
            .iter()
            .map(|target| self.client.call(target, HEALTH_PATH, None));
        let results = join_all(probes).await;

        let mut services = Map::new();
        for (target, result) in self.targets.iter().zip(results) {
            let entry = health_entry(target, result);
            services.insert(target.name().to_string(), entry);
        }

        AggregatedResponse::ok(json!({
            "status": "ok",
            "service": self.service,
            "services": Value::Object(services),
        }))
    }
}

fn health_entry(target: &DownstreamTarget, result: DownstreamResult) -> Value {
    match result.into_outcome() {
        Ok((status, body)) if status == StatusCode::OK => body,
        Ok((status, _)) => {
            tracing::warn!(downstream = %target.name(), %status, "Health probe returned non-200");
            unavailable()
        }
        Err(error) => {
            tracing::warn!(downstream = %target.name(), error = %error, "Health probe failed");
            unavailable()
        }
    }
}

/// The exact entry substituted for a failed probe.
pub fn unavailable() -> Value {
    json!({ "status": "unavailable" })
}
