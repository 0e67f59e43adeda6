//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, defaults for missing sections)
//!     → loader.rs (environment overrides: SERVICE_USERS_URL, ...)
//!     → CLI flags (role, bind address)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → passed by reference into each component at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::DownstreamConfig;
pub use schema::GatewayConfig;
pub use schema::ListenerConfig;
pub use schema::Role;
pub use schema::{LogFormat, ObservabilityConfig, PollerConfig, TimeoutConfig};
