//! Downstream failure taxonomy.

use reqwest::StatusCode;
use thiserror::Error;

/// Why a downstream call did not produce a usable JSON body.
#[derive(Debug, Clone, Error)]
pub enum DownstreamError {
    /// Connection refused, DNS failure, reset before a response arrived.
    #[error("unreachable")]
    Unreachable { details: String },

    /// No complete response within the call's deadline.
    #[error("timeout")]
    Timeout,

    /// The downstream answered with a status outside 2xx/3xx.
    #[error("upstream returned {status}: {message}")]
    Http { status: StatusCode, message: String },

    /// A success status with a body that is not JSON.
    #[error("invalid body")]
    InvalidBody { details: String },
}

impl DownstreamError {
    /// Human-readable detail text, beyond the short description.
    pub fn details(&self) -> String {
        match self {
            DownstreamError::Unreachable { details } => details.clone(),
            DownstreamError::Timeout => "request timed out".to_string(),
            DownstreamError::Http { status, message } => format!("{}: {}", status, message),
            DownstreamError::InvalidBody { details } => details.clone(),
        }
    }

    /// Label used for the `outcome` metric dimension.
    pub fn kind(&self) -> &'static str {
        match self {
            DownstreamError::Unreachable { .. } => "unreachable",
            DownstreamError::Timeout => "timeout",
            DownstreamError::Http { .. } => "http_error",
            DownstreamError::InvalidBody { .. } => "invalid_body",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DownstreamError::Http { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
