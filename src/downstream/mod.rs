//! Downstream service access.
//!
//! # Data Flow
//! ```text
//! handler
//!     → DownstreamClient::call(target, path, timeout)
//!     → GET base_url + path (bounded by timeout)
//!     → DownstreamResult { status?, body?, error? }
//!     → aggregator decides the inbound status
//! ```
//!
//! # Design Decisions
//! - Failures are values, never panics or propagated transport errors
//! - One attempt per call
//! - Targets are immutable and built once from configuration

pub mod client;
pub mod error;
pub mod target;

pub use client::{DownstreamClient, DownstreamResult};
pub use error::DownstreamError;
pub use target::{DownstreamTarget, DEFAULT_TIMEOUT};
