use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// The payload and status an inbound handler answers with.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedResponse {
    pub payload: Value,
    pub http_status: StatusCode,
}

impl AggregatedResponse {
    pub fn new(http_status: StatusCode, payload: Value) -> Self {
        Self {
            payload,
            http_status,
        }
    }

    pub fn ok(payload: Value) -> Self {
        Self::new(StatusCode::OK, payload)
    }

    /// `{"error": message}` with the given status.
    pub fn error(http_status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(http_status, json!({ "error": message.into() }))
    }

    /// 404 `{"error": "<entity> not found"}`.
    pub fn not_found(entity: &str) -> Self {
        Self::error(StatusCode::NOT_FOUND, format!("{} not found", entity))
    }
}

impl IntoResponse for AggregatedResponse {
    fn into_response(self) -> Response {
        if self.http_status.is_server_error() {
            tracing::debug!(status = %self.http_status, payload = %self.payload, "Answering with error");
        }
        (self.http_status, Json(self.payload)).into_response()
    }
}
