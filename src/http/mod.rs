//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum, middleware stack)
//!     → request.rs (request ID)
//!     → routing (role route table)
//!     → handler (fixture lookup or downstream aggregation)
//!     → JSON response with x-request-id
//! ```

pub mod request;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::HttpServer;
