//! Order book handlers (`orders` role).

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::aggregate::AggregatedResponse;
use crate::routing::NumericId;
use crate::services::fixtures;
use crate::services::records::Order;
use crate::services::source::{FixtureSource, RecordSource};

/// Shared state of the order handlers.
#[derive(Clone)]
pub struct OrderBook {
    source: Arc<dyn RecordSource<Order>>,
}

impl OrderBook {
    pub fn new(source: Arc<dyn RecordSource<Order>>) -> Self {
        Self { source }
    }

    pub fn with_fixtures() -> Self {
        Self::new(Arc::new(FixtureSource::new(fixtures::orders())))
    }

    /// Orders placed by `user_id`, in fixture order.
    pub fn for_user(&self, user_id: u64) -> Vec<Order> {
        self.source
            .records()
            .iter()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect()
    }
}

/// `GET /orders`
pub async fn list_orders(State(book): State<OrderBook>) -> Json<Vec<Order>> {
    Json(book.source.records().to_vec())
}

/// `GET /orders/{id}`
pub async fn get_order(
    State(book): State<OrderBook>,
    NumericId(id): NumericId,
) -> Result<Json<Order>, AggregatedResponse> {
    book.source
        .find(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AggregatedResponse::not_found("order"))
}

/// `GET /orders/user/{id}`; an unknown user simply has no orders.
pub async fn orders_for_user(
    State(book): State<OrderBook>,
    NumericId(user_id): NumericId,
) -> Json<Vec<Order>> {
    Json(book.for_user(user_id))
}
