//! Records served by the fixture services.

use serde::{Deserialize, Serialize};

/// Anything addressable by a numeric path segment.
pub trait Identified {
    fn id(&self) -> u64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    /// Absent on profile records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub active_since: String,
}

impl Identified for User {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub user_id: u64,
    pub product: String,
    pub amount: f64,
    pub status: String,
    pub date: String,
}

impl Identified for Order {
    fn id(&self) -> u64 {
        self.id
    }
}
