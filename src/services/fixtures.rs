//! Hardcoded records standing in for a datastore.

use crate::services::records::{Order, User};

fn user(id: u64, name: &str, email: Option<&str>, active_since: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.map(str::to_string),
        active_since: active_since.to_string(),
    }
}

fn order(id: u64, user_id: u64, product: &str, amount: f64, status: &str, date: &str) -> Order {
    Order {
        id,
        user_id,
        product: product.to_string(),
        amount,
        status: status.to_string(),
        date: date.to_string(),
    }
}

/// Users served by the `users` role.
pub fn users() -> Vec<User> {
    vec![
        user(1, "João Silva", Some("joao.silva@email.com"), "2021-01-10"),
        user(2, "Maria Santos", Some("maria.santos@email.com"), "2022-03-05"),
        user(3, "Pedro Oliveira", Some("pedro.oliveira@email.com"), "2020-07-22"),
        user(4, "Ana Costa", Some("ana.costa@email.com"), "2023-05-15"),
    ]
}

/// Profiles served by the `profiles` role.
pub fn profiles() -> Vec<User> {
    vec![
        user(1, "João Silva", None, "2021-01-10"),
        user(2, "Maria Santos", None, "2022-03-05"),
        user(3, "Pedro Oliveira", None, "2020-07-22"),
    ]
}

/// Orders served by the `orders` role.
pub fn orders() -> Vec<Order> {
    vec![
        order(1, 1, "Notebook Dell", 3500.00, "delivered", "2024-01-15"),
        order(2, 1, "Mouse Logitech", 150.00, "delivered", "2024-02-10"),
        order(3, 2, "Teclado Mecânico", 450.00, "processing", "2024-03-20"),
        order(4, 3, "Monitor LG 27\"", 1200.00, "shipped", "2024-03-25"),
        order(5, 2, "Webcam HD", 280.00, "delivered", "2024-02-28"),
    ]
}
