//! Per-role route tables.
//!
//! # Responsibilities
//! - Map method + path patterns onto handlers for one role
//! - Build each role's state once from the validated configuration
//!
//! # Design Decisions
//! - Immutable after construction (state shared via `Arc` or cheap clones)
//! - Unknown paths answer with a JSON 404, never HTML

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::config::{GatewayConfig, Role};
use crate::downstream::DownstreamClient;
use crate::gateway::{self, Gateway};
use crate::health::service_health;
use crate::services::hello::{self, HelloPage};
use crate::services::{orders, users, OrderBook, UserDirectory};
use crate::summary::{self, UserSummaries};

/// Routes of `config.role`, with state built from `config`.
pub fn build_routes(config: &GatewayConfig, client: DownstreamClient) -> Router {
    let routes = match config.role {
        Role::Gateway => gateway_routes(Arc::new(Gateway::from_config(config, client))),
        Role::Users => user_routes(UserDirectory::with_fixtures(), Role::Users.service_name()),
        Role::Profiles => profile_routes(UserDirectory::with_profiles(), Role::Profiles.service_name()),
        Role::Orders => order_routes(OrderBook::with_fixtures(), Role::Orders.service_name()),
        Role::Summary => summary_routes(
            Arc::new(UserSummaries::from_config(config, client)),
            Role::Summary.service_name(),
        ),
        Role::Hello => hello_routes(HelloPage::new(config.hello.hostname.clone())),
    };
    routes.fallback(|| async { super::not_found() })
}

pub fn gateway_routes(gateway: Arc<Gateway>) -> Router {
    Router::new()
        .route("/users", get(gateway::list_users))
        .route("/users/{id}", get(gateway::get_user))
        .route("/orders", get(gateway::list_orders))
        .route("/orders/{id}", get(gateway::get_order))
        .route("/orders/user/{user_id}", get(gateway::orders_for_user))
        .route("/health", get(gateway::health))
        .with_state(gateway)
}

pub fn user_routes(directory: UserDirectory, service: &'static str) -> Router {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/{id}", get(users::get_user))
        .route("/health", get(move || async move { service_health(service) }))
        .with_state(directory)
}

/// The profile service only lists; there is no lookup by id.
pub fn profile_routes(directory: UserDirectory, service: &'static str) -> Router {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/health", get(move || async move { service_health(service) }))
        .with_state(directory)
}

pub fn order_routes(book: OrderBook, service: &'static str) -> Router {
    Router::new()
        .route("/orders", get(orders::list_orders))
        .route("/orders/{id}", get(orders::get_order))
        .route("/orders/user/{user_id}", get(orders::orders_for_user))
        .route("/health", get(move || async move { service_health(service) }))
        .with_state(book)
}

pub fn summary_routes(summaries: Arc<UserSummaries>, service: &'static str) -> Router {
    Router::new()
        .route("/users/summary", get(summary::users_summary))
        .route("/health", get(move || async move { service_health(service) }))
        .with_state(summaries)
}

pub fn hello_routes(page: HelloPage) -> Router {
    Router::new()
        .route("/", get(hello::index))
        .route("/health", get(hello::health))
        .with_state(page)
}
