//! Health reporting subsystem.
//!
//! # Data Flow
//! ```text
//! Leaf service (service_health):
//!     GET /health → {"status": "ok", "service": <name>}
//!
//! Aggregating service (composer.rs):
//!     GET /health
//!     → probe each downstream /health concurrently
//!     → embed 200 bodies verbatim, others as {"status": "unavailable"}
//!     → always 200
//! ```

pub mod composer;

pub use composer::{HealthComposer, HEALTH_PATH};

use serde_json::json;

use crate::aggregate::AggregatedResponse;

/// Health payload of a service without downstreams.
pub fn service_health(service: &str) -> AggregatedResponse {
    AggregatedResponse::ok(json!({ "status": "ok", "service": service }))
}
