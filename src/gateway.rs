//! Passthrough gateway in front of the user directory and order book.
//!
//! # Routes
//! ```text
//! GET /users              → users  GET /users
//! GET /users/{id}         → users  GET /users/{id}
//! GET /orders             → orders GET /orders
//! GET /orders/{id}        → orders GET /orders/{id}
//! GET /orders/user/{id}   → orders GET /orders/user/{id}
//! GET /health             → composite of users + orders /health
//! ```

use std::sync::Arc;

use axum::extract::State;

use crate::aggregate::{passthrough, AggregatedResponse};
use crate::config::GatewayConfig;
use crate::downstream::{DownstreamClient, DownstreamTarget};
use crate::health::HealthComposer;
use crate::routing::NumericId;

/// Aggregator state for the `gateway` role.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: DownstreamClient,
    users: DownstreamTarget,
    orders: DownstreamTarget,
    health: HealthComposer,
}

impl Gateway {
    pub fn new(client: DownstreamClient, users: DownstreamTarget, orders: DownstreamTarget) -> Self {
        let health = HealthComposer::new("gateway", client.clone(), vec![users.clone(), orders.clone()]);
        Self {
            client,
            users,
            orders,
            health,
        }
    }

    pub fn from_config(config: &GatewayConfig, client: DownstreamClient) -> Self {
        let fallback = config.timeouts.downstream();
        Self::new(
            client,
            DownstreamTarget::from_config(&config.downstreams.users, fallback),
            DownstreamTarget::from_config(&config.downstreams.orders, fallback),
        )
    }

    async fn forward(&self, target: &DownstreamTarget, path: &str, entity: &str) -> AggregatedResponse {
        let result = self.client.call(target, path, None).await;
        passthrough(target, result, entity)
    }

    pub async fn list_users(&self) -> AggregatedResponse {
        self.forward(&self.users, "/users", "users").await
    }

    pub async fn get_user(&self, id: u64) -> AggregatedResponse {
        self.forward(&self.users, &format!("/users/{}", id), "user").await
    }

    pub async fn list_orders(&self) -> AggregatedResponse {
        self.forward(&self.orders, "/orders", "orders").await
    }

    pub async fn get_order(&self, id: u64) -> AggregatedResponse {
        self.forward(&self.orders, &format!("/orders/{}", id), "order").await
    }

    pub async fn orders_for_user(&self, user_id: u64) -> AggregatedResponse {
        self.forward(&self.orders, &format!("/orders/user/{}", user_id), "orders")
            .await
    }

    pub async fn health(&self) -> AggregatedResponse {
        self.health.health().await
    }
}

pub async fn list_users(State(gateway): State<Arc<Gateway>>) -> AggregatedResponse {
    gateway.list_users().await
}

pub async fn get_user(State(gateway): State<Arc<Gateway>>, NumericId(id): NumericId) -> AggregatedResponse {
    gateway.get_user(id).await
}

pub async fn list_orders(State(gateway): State<Arc<Gateway>>) -> AggregatedResponse {
    gateway.list_orders().await
}

pub async fn get_order(State(gateway): State<Arc<Gateway>>, NumericId(id): NumericId) -> AggregatedResponse {
    gateway.get_order(id).await
}

pub async fn orders_for_user(
    State(gateway): State<Arc<Gateway>>,
    NumericId(user_id): NumericId,
) -> AggregatedResponse {
    gateway.orders_for_user(user_id).await
}

pub async fn health(State(gateway): State<Arc<Gateway>>) -> AggregatedResponse {
    gateway.health().await
}
