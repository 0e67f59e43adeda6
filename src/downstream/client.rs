//! Single-shot JSON GET against a downstream service.
//!
//! # Responsibilities
//! - Build `base_url + path` and issue one GET with a deadline
//! - Classify the outcome: JSON body, HTTP error, unreachable, timeout
//! - Never let a transport failure escape as anything but a result
//!
//! # Design Decisions
//! - No retries: a failed call is reported, the caller decides the status
//! - The deadline covers connect, headers and body
//! - Bodies of 2xx/3xx responses are passed through without schema checks

use std::time::{Duration, Instant};

use axum::body::Bytes;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::time;

use crate::downstream::error::DownstreamError;
use crate::downstream::target::DownstreamTarget;
use crate::observability::metrics;

/// Outcome of one downstream call.
#[derive(Debug, Clone)]
pub struct DownstreamResult {
    /// Status returned by the downstream, absent when no response arrived.
    pub status: Option<StatusCode>,
    /// Parsed JSON body, when there was one.
    pub body: Option<Value>,
    /// Set whenever the call did not succeed.
    pub error: Option<DownstreamError>,
}

impl DownstreamResult {
    fn success(status: StatusCode, body: Value) -> Self {
        Self {
            status: Some(status),
            body: Some(body),
            error: None,
        }
    }

    fn failure(status: Option<StatusCode>, body: Option<Value>, error: DownstreamError) -> Self {
        Self {
            status,
            body,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Collapse into the upstream status and body, or the failure.
    pub fn into_outcome(self) -> Result<(StatusCode, Value), DownstreamError> {
        match (self.error, self.status, self.body) {
            (Some(error), _, _) => Err(error),
            (None, Some(status), Some(body)) => Ok((status, body)),
            (None, _, _) => Err(DownstreamError::InvalidBody {
                details: "empty response".to_string(),
            }),
        }
    }
}

/// HTTP client shared by every downstream call in a process.
#[derive(Debug, Clone)]
pub struct DownstreamClient {
    http: reqwest::Client,
}

impl Default for DownstreamClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DownstreamClient {
    pub fn new() -> Self {
        // Service-to-service traffic never goes through an HTTP proxy.
        let http = reqwest::Client::builder()
            .no_proxy()
            .user_agent(concat!("microservice-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self { http }
    }

    /// GET `target.base_url + path`, bounded by `timeout` or the target default.
    pub async fn call(
        &self,
        target: &DownstreamTarget,
        path: &str,
        timeout: Option<Duration>,
    ) -> DownstreamResult {
        let url = target.url(path);
        let timeout = timeout.unwrap_or_else(|| target.default_timeout());
        let start = Instant::now();

        tracing::debug!(downstream = %target.name(), url = %url, ?timeout, "Calling downstream");

        let result = match time::timeout(timeout, self.fetch(&url)).await {
            Ok(Ok((status, bytes))) => classify(status, &bytes),
            Ok(Err(e)) if e.is_timeout() => {
                DownstreamResult::failure(None, None, DownstreamError::Timeout)
            }
            Ok(Err(e)) => DownstreamResult::failure(
                None,
                None,
                DownstreamError::Unreachable {
                    details: e.to_string(),
                },
            ),
            Err(_) => DownstreamResult::failure(None, None, DownstreamError::Timeout),
        };

        match &result.error {
            None => {
                metrics::record_downstream(target.name(), "success", start);
                tracing::debug!(
                    downstream = %target.name(),
                    status = ?result.status,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Downstream call succeeded"
                );
            }
            Some(error) => {
                metrics::record_downstream(target.name(), error.kind(), start);
                tracing::warn!(
                    downstream = %target.name(),
                    url = %url,
                    status = ?result.status,
                    error = %error,
                    details = %error.details(),
                    "Downstream call failed"
                );
            }
        }

        result
    }

    async fn fetch(&self, url: &str) -> Result<(StatusCode, Bytes), reqwest::Error> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        Ok((status, bytes))
    }
}

fn classify(status: StatusCode, bytes: &[u8]) -> DownstreamResult {
    if status.is_success() || status.is_redirection() {
        return match serde_json::from_slice::<Value>(bytes) {
            Ok(body) => DownstreamResult::success(status, body),
            Err(e) => DownstreamResult::failure(
                Some(status),
                None,
                DownstreamError::InvalidBody {
                    details: e.to_string(),
                },
            ),
        };
    }

    let body = serde_json::from_slice::<Value>(bytes).ok();
    let message = body
        .as_ref()
        .and_then(|b| b.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "unknown error".to_string());

    DownstreamResult::failure(Some(status), body, DownstreamError::Http { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_success_passes_body_through() {
        let result = classify(StatusCode::OK, br#"{"id":2,"name":"Maria Santos"}"#);
        assert!(result.is_success());
        let (status, body) = result.into_outcome().unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": 2, "name": "Maria Santos"}));
    }

    #[test]
    fn test_classify_http_error_uses_error_field() {
        let result = classify(StatusCode::NOT_FOUND, br#"{"error":"user not found"}"#);
        assert_eq!(result.status, Some(StatusCode::NOT_FOUND));
        assert_eq!(result.body, Some(json!({"error": "user not found"})));
        match result.error {
            Some(DownstreamError::Http { status, message }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "user not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_classify_http_error_without_json_uses_reason() {
        let result = classify(StatusCode::SERVICE_UNAVAILABLE, b"<html>down</html>");
        assert_eq!(result.body, None);
        let err = result.into_outcome().unwrap_err();
        assert_eq!(
            err.to_string(),
            "upstream returned 503 Service Unavailable: Service Unavailable"
        );
    }

    #[test]
    fn test_classify_non_json_success_is_invalid_body() {
        let result = classify(StatusCode::OK, b"<h1>hello</h1>");
        assert_eq!(result.status, Some(StatusCode::OK));
        assert!(matches!(
            result.error,
            Some(DownstreamError::InvalidBody { .. })
        ));
    }
}
