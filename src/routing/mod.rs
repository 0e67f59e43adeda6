//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     GatewayConfig.role
//!     → router.rs (pick the role's route table, build its state)
//!     → axum Router (frozen)
//!
//! Incoming Request (method, path)
//!     → axum matcher
//!     → extract.rs (numeric ids; non-numeric → 404)
//!     → handler
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - One route table per role, no shared global registry

pub mod extract;
pub mod router;

pub use extract::NumericId;
pub use router::build_routes;

use axum::http::StatusCode;

use crate::aggregate::AggregatedResponse;

/// JSON 404 for paths that do not name a resource.
pub fn not_found() -> AggregatedResponse {
    AggregatedResponse::error(StatusCode::NOT_FOUND, "not found")
}
