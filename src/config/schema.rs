//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for every
//! service role. All types derive Serde traits for deserialization from
//! config files.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration shared by every service role.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Which service this process runs.
    pub role: Role,

    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Downstream service locations.
    pub downstreams: DownstreamsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Settings for the `hello` role.
    pub hello: HelloConfig,

    /// Settings for the polling client.
    pub poller: PollerConfig,
}

/// Service roles this binary can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Passthrough gateway in front of `users` and `orders`.
    #[default]
    Gateway,
    /// Fixture-backed user directory.
    Users,
    /// Fixture-backed order book.
    Orders,
    /// Fixture-backed user profiles ("service A").
    Profiles,
    /// Composition over `profiles` ("service B").
    Summary,
    /// HTML landing page polled by the requester.
    Hello,
}

impl Role {
    /// Port the role listens on when no bind address is configured.
    pub fn default_port(self) -> u16 {
        match self {
            Role::Gateway | Role::Hello => 8080,
            Role::Users | Role::Profiles => 5000,
            Role::Orders | Role::Summary => 5001,
        }
    }

    /// Name reported by the role's `/health` endpoint.
    pub fn service_name(self) -> &'static str {
        match self {
            Role::Gateway => "gateway",
            Role::Users => "service-users",
            Role::Orders => "service-orders",
            Role::Profiles => "service-a",
            Role::Summary => "service-b",
            Role::Hello => "hello",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Gateway => "gateway",
            Role::Users => "users",
            Role::Orders => "orders",
            Role::Profiles => "profiles",
            Role::Summary => "summary",
            Role::Hello => "hello",
        };
        f.write_str(name)
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080"). Falls back to the role's port.
    pub bind_address: Option<String>,
}

impl ListenerConfig {
    /// Resolve the address to bind for `role`.
    pub fn resolve(&self, role: Role) -> String {
        match &self.bind_address {
            Some(addr) => addr.clone(),
            None => format!("0.0.0.0:{}", role.default_port()),
        }
    }
}

/// Locations of the downstream services.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DownstreamsConfig {
    /// User directory behind the gateway.
    pub users: DownstreamConfig,

    /// Order book behind the gateway.
    pub orders: DownstreamConfig,

    /// Profile service consumed by the summary role.
    pub profiles: DownstreamConfig,
}

impl Default for DownstreamsConfig {
    fn default() -> Self {
        Self {
            users: DownstreamConfig::new("users", "http://service-users:5000"),
            orders: DownstreamConfig::new("orders", "http://service-orders:5001"),
            profiles: DownstreamConfig::new("profiles", "http://service-a:5000"),
        }
    }
}

/// A single downstream service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownstreamConfig {
    /// Name used in logs, metrics and composite health payloads.
    pub name: String,

    /// Base URL (scheme, host, port), without a trailing path.
    pub url: String,

    /// Per-downstream timeout override in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl DownstreamConfig {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            timeout_secs: None,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Default timeout for a single downstream call, in seconds.
    pub downstream_secs: u64,

    /// Total time allowed for an inbound request, in seconds.
    pub request_secs: u64,
}

impl TimeoutConfig {
    pub fn downstream(&self) -> Duration {
        Duration::from_secs(self.downstream_secs)
    }

    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            downstream_secs: 5,
            request_secs: 30,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Settings for the `hello` role.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HelloConfig {
    /// Hostname shown on the landing page.
    pub hostname: String,
}

impl Default for HelloConfig {
    fn default() -> Self {
        Self {
            hostname: "unknown".to_string(),
        }
    }
}

/// Settings for the polling client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollerConfig {
    /// URL requested on every tick.
    pub server_url: String,

    /// Seconds between two requests.
    pub interval_secs: u64,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Stop after this many requests (runs forever when unset).
    pub max_requests: Option<u64>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            server_url: "http://server:8080".to_string(),
            interval_secs: 5,
            timeout_secs: 5,
            max_requests: None,
        }
    }
}
