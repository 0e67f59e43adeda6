//! User directory handlers (`users` and `profiles` roles).

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::aggregate::AggregatedResponse;
use crate::routing::NumericId;
use crate::services::fixtures;
use crate::services::records::User;
use crate::services::source::{FixtureSource, RecordSource};

/// Shared state of the user handlers.
#[derive(Clone)]
pub struct UserDirectory {
    source: Arc<dyn RecordSource<User>>,
}

impl UserDirectory {
    pub fn new(source: Arc<dyn RecordSource<User>>) -> Self {
        Self { source }
    }

    /// Directory served by the `users` role.
    pub fn with_fixtures() -> Self {
        Self::new(Arc::new(FixtureSource::new(fixtures::users())))
    }

    /// Directory served by the `profiles` role.
    pub fn with_profiles() -> Self {
        Self::new(Arc::new(FixtureSource::new(fixtures::profiles())))
    }
}

/// `GET /users`
pub async fn list_users(State(directory): State<UserDirectory>) -> Json<Vec<User>> {
    Json(directory.source.records().to_vec())
}

/// `GET /users/{id}`
pub async fn get_user(
    State(directory): State<UserDirectory>,
    NumericId(id): NumericId,
) -> Result<Json<User>, AggregatedResponse> {
    match directory.source.find(id) {
        Some(user) => Ok(Json(user.clone())),
        None => {
            tracing::debug!(user_id = id, "User not found");
            Err(AggregatedResponse::not_found("user"))
        }
    }
}
