//! Named downstream endpoints.

use std::time::Duration;

use crate::config::DownstreamConfig;

/// Default per-call deadline when neither the call nor the target sets one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// An upstream HTTP service, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownstreamTarget {
    name: String,
    base_url: String,
    default_timeout: Duration,
}

impl DownstreamTarget {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>, default_timeout: Duration) -> Self {
        let base_url = base_url.into();
        Self {
            name: name.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            default_timeout,
        }
    }

    /// Build a target from config, using `fallback` unless the downstream
    /// carries its own timeout.
    pub fn from_config(config: &DownstreamConfig, fallback: Duration) -> Self {
        let timeout = config
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(fallback);
        Self::new(config.name.clone(), config.url.clone(), timeout)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// `base_url + path`; `path` is expected to start with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let target = DownstreamTarget::new("users", "http://service-users:5000/", DEFAULT_TIMEOUT);
        assert_eq!(target.base_url(), "http://service-users:5000");
        assert_eq!(target.url("/users/2"), "http://service-users:5000/users/2");
    }

    #[test]
    fn test_config_timeout_wins_over_fallback() {
        let mut config = DownstreamConfig::new("orders", "http://service-orders:5001");
        let target = DownstreamTarget::from_config(&config, Duration::from_secs(3));
        assert_eq!(target.default_timeout(), Duration::from_secs(3));

        config.timeout_secs = Some(1);
        let target = DownstreamTarget::from_config(&config, Duration::from_secs(3));
        assert_eq!(target.default_timeout(), Duration::from_secs(1));
        assert_eq!(target.name(), "orders");
    }
}
