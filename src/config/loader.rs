//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value {value:?} for environment variable {var}")]
    Env { var: &'static str, value: String },

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Environment variables honoured at startup.
pub const ENV_SERVICE_USERS_URL: &str = "SERVICE_USERS_URL";
pub const ENV_SERVICE_ORDERS_URL: &str = "SERVICE_ORDERS_URL";
pub const ENV_SERVICE_A_URL: &str = "SERVICE_A_URL";
pub const ENV_SERVER_URL: &str = "SERVER_URL";
pub const ENV_INTERVAL: &str = "INTERVAL";
pub const ENV_HOSTNAME: &str = "HOSTNAME";
pub const ENV_BIND_ADDRESS: &str = "BIND_ADDRESS";

/// Parse a TOML document into a configuration without validating it.
pub fn parse_config(content: &str) -> Result<GatewayConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read the configuration file, or fall back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            parse_config(&content)
        }
        None => Ok(GatewayConfig::default()),
    }
}

/// Overlay environment variables on top of `config`.
///
/// `lookup` is `std::env::var` in production and a map in tests; handlers
/// never read the environment themselves.
pub fn apply_env_overrides<F>(config: &mut GatewayConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_SERVICE_USERS_URL) {
        config.downstreams.users.url = url;
    }
    if let Some(url) = lookup(ENV_SERVICE_ORDERS_URL) {
        config.downstreams.orders.url = url;
    }
    if let Some(url) = lookup(ENV_SERVICE_A_URL) {
        config.downstreams.profiles.url = url;
    }
    if let Some(url) = lookup(ENV_SERVER_URL) {
        config.poller.server_url = url;
    }
    if let Some(raw) = lookup(ENV_INTERVAL) {
        config.poller.interval_secs = raw.trim().parse().map_err(|_| ConfigError::Env {
            var: ENV_INTERVAL,
            value: raw.clone(),
        })?;
    }
    if let Some(hostname) = lookup(ENV_HOSTNAME) {
        config.hello.hostname = hostname;
    }
    if let Some(addr) = lookup(ENV_BIND_ADDRESS) {
        config.listener.bind_address = Some(addr);
    }
    Ok(())
}

/// Run semantic validation, wrapping failures as a [`ConfigError`].
pub fn finalize(config: GatewayConfig) -> Result<GatewayConfig, ConfigError> {
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
