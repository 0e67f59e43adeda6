//! Path extractors shared by every role.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::aggregate::AggregatedResponse;

/// A non-negative integer path segment.
///
/// Anything else does not name a resource, so the rejection is a 404
/// rather than axum's default 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericId(pub u64);

impl<S> FromRequestParts<S> for NumericId
where
    S: Send + Sync,
{
    type Rejection = AggregatedResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<u64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(NumericId(id)),
            Err(rejection) => {
                tracing::debug!(path = %parts.uri.path(), error = %rejection, "Rejected non-numeric id");
                Err(super::not_found())
            }
        }
    }
}
