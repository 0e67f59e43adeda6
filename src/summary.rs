//! Composition route over the profile service (`summary` role).
//!
//! One downstream call fetches every profile; the summaries are derived in
//! process. Any failure of that call fails the whole route with 502.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::aggregate::AggregatedResponse;
use crate::config::GatewayConfig;
use crate::downstream::{DownstreamClient, DownstreamTarget};

/// Error text reported when the profile service cannot be used.
pub const PROFILES_UNAVAILABLE: &str = "Não foi possível consultar o microsserviço A";

/// Aggregator state for the `summary` role.
#[derive(Debug, Clone)]
pub struct UserSummaries {
    client: DownstreamClient,
    profiles: DownstreamTarget,
}

impl UserSummaries {
    pub fn new(client: DownstreamClient, profiles: DownstreamTarget) -> Self {
        Self { client, profiles }
    }

    pub fn from_config(config: &GatewayConfig, client: DownstreamClient) -> Self {
        let profiles =
            DownstreamTarget::from_config(&config.downstreams.profiles, config.timeouts.downstream());
        Self::new(client, profiles)
    }

    pub async fn summarize(&self) -> AggregatedResponse {
        let result = self.client.call(&self.profiles, "/users", None).await;

        let users = match result.into_outcome() {
            Ok((_, Value::Array(users))) => users,
            Ok((_, other)) => {
                return unavailable(format!("expected a JSON array, got {}", kind_of(&other)));
            }
            Err(error) => return unavailable(error.details()),
        };

        let summaries: Vec<String> = users.iter().map(summary_line).collect();

        AggregatedResponse::ok(json!({
            "source": self.profiles.url("/users"),
            "count": users.len(),
            "summaries": summaries,
        }))
    }
}

fn unavailable(details: String) -> AggregatedResponse {
    AggregatedResponse::new(
        StatusCode::BAD_GATEWAY,
        json!({
            "error": PROFILES_UNAVAILABLE,
            "details": details,
        }),
    )
}

/// `Usuário <name> ativo desde <active_since>`; missing fields render as `None`.
pub fn summary_line(user: &Value) -> String {
    format!(
        "Usuário {} ativo desde {}",
        field_text(user.get("name")),
        field_text(user.get("active_since"))
    )
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "None".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// `GET /users/summary`
pub async fn users_summary(State(summaries): State<Arc<UserSummaries>>) -> AggregatedResponse {
    summaries.summarize().await
}
