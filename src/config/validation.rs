//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate downstream URLs (absolute http/https, no path)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs after env and CLI overrides, before any subsystem starts

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::{DownstreamConfig, GatewayConfig};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid URL {value:?} ({reason})")]
    InvalidUrl {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{field}: invalid socket address {value:?}")]
    InvalidAddress { field: String, value: String },

    #[error("{field}: must be greater than zero")]
    Zero { field: String },

    #[error("{field}: must not be empty")]
    Empty { field: String },

    #[error("{field}: {value}s must be shorter than timeouts.request_secs ({limit}s)")]
    ExceedsRequestTimeout { field: String, value: u64, limit: u64 },
}

/// Validate the whole configuration, collecting every error.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let role = config.role;
    let bind = config.listener.resolve(role);
    if bind.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address".into(),
            value: bind,
        });
    }

    let downstreams = [
        ("users", &config.downstreams.users),
        ("orders", &config.downstreams.orders),
        ("profiles", &config.downstreams.profiles),
    ];
    for (key, downstream) in downstreams {
        check_downstream(key, downstream, &mut errors);
    }

    if config.timeouts.downstream_secs == 0 {
        errors.push(ValidationError::Zero {
            field: "timeouts.downstream_secs".into(),
        });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero {
            field: "timeouts.request_secs".into(),
        });
    }

    // A downstream call must fail before the inbound request does.
    let limit = config.timeouts.request_secs;
    if limit > 0 {
        let mut timeouts = vec![(
            "timeouts.downstream_secs".to_string(),
            config.timeouts.downstream_secs,
        )];
        for (key, downstream) in downstreams {
            if let Some(secs) = downstream.timeout_secs {
                timeouts.push((format!("downstreams.{}.timeout_secs", key), secs));
            }
        }
        for (field, value) in timeouts {
            if value >= limit {
                errors.push(ValidationError::ExceedsRequestTimeout { field, value, limit });
            }
        }
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address".into(),
            value: observability.metrics_address.clone(),
        });
    }

    let poller = &config.poller;
    if let Err(reason) = check_url(&poller.server_url, false) {
        errors.push(ValidationError::InvalidUrl {
            field: "poller.server_url".into(),
            value: poller.server_url.clone(),
            reason,
        });
    }
    if poller.interval_secs == 0 {
        errors.push(ValidationError::Zero {
            field: "poller.interval_secs".into(),
        });
    }
    if poller.timeout_secs == 0 {
        errors.push(ValidationError::Zero {
            field: "poller.timeout_secs".into(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_downstream(key: &str, downstream: &DownstreamConfig, errors: &mut Vec<ValidationError>) {
    if downstream.name.trim().is_empty() {
        errors.push(ValidationError::Empty {
            field: format!("downstreams.{}.name", key),
        });
    }
    if let Err(reason) = check_url(&downstream.url, true) {
        errors.push(ValidationError::InvalidUrl {
            field: format!("downstreams.{}.url", key),
            value: downstream.url.clone(),
            reason,
        });
    }
    if downstream.timeout_secs == Some(0) {
        errors.push(ValidationError::Zero {
            field: format!("downstreams.{}.timeout_secs", key),
        });
    }
}

/// Base URLs must be absolute http(s); `base_only` forbids a path so that
/// resource paths can be appended verbatim.
fn check_url(raw: &str, base_only: bool) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme {}", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    if base_only && url.path().trim_end_matches('/') != "" {
        return Err("base URL must not carry a path".to_string());
    }
    if base_only && url.query().is_some() {
        return Err("base URL must not carry a query".to_string());
    }
    Ok(())
}
