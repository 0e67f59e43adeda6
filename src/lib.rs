//! Microservice gateway library.
//!
//! Small HTTP/JSON services demonstrating gateway fan-out: a passthrough
//! gateway with composite health, a composition route over a profile
//! service, the fixture-backed services behind them, and a polling client.

pub mod aggregate;
pub mod config;
pub mod downstream;
pub mod gateway;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod poller;
pub mod routing;
pub mod services;
pub mod summary;

pub use aggregate::AggregatedResponse;
pub use config::{GatewayConfig, Role};
pub use downstream::{DownstreamClient, DownstreamError, DownstreamResult, DownstreamTarget};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
