//! Combining downstream results into one inbound response.
//!
//! # Merge Rules
//! ```text
//! passthrough:  downstream 2xx/3xx      → same status, same body
//!               downstream 404          → 404 {"error": "<entity> not found"}
//!               anything else           → 502 {"error": ..., "service": ...}
//! composition:  see summary.rs
//! health:       see health::composer
//! ```

pub mod response;

pub use response::AggregatedResponse;

use axum::http::StatusCode;
use serde_json::json;

use crate::downstream::{DownstreamResult, DownstreamTarget};

/// Forward a single downstream result, mapping failures to 404/502.
pub fn passthrough(target: &DownstreamTarget, result: DownstreamResult, entity: &str) -> AggregatedResponse {
    match result.into_outcome() {
        Ok((status, body)) => AggregatedResponse::new(status, body),
        Err(error) if error.is_not_found() => AggregatedResponse::not_found(entity),
        Err(error) => AggregatedResponse::new(
            StatusCode::BAD_GATEWAY,
            json!({
                "error": format!("{} {}", target.name(), error),
                "service": target.name(),
            }),
        ),
    }
}
