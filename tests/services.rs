mod common;

use common::{client, role_config, start_service};
use microservice_gateway::config::Role;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_users_service() {
    let users = start_service(role_config(Role::Users)).await;

    let res = client().get(users.url("/users")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["João Silva", "Maria Santos", "Pedro Oliveira", "Ana Costa"]);

    let res = client().get(users.url("/users/4")).send().await.unwrap();
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({
            "id": 4,
            "name": "Ana Costa",
            "email": "ana.costa@email.com",
            "active_since": "2023-05-15",
        })
    );

    let res = client().get(users.url("/users/5")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({"error": "user not found"}));
}

#[tokio::test]
async fn test_profiles_service_lists_without_email() {
    let profiles = start_service(role_config(Role::Profiles)).await;

    let res = client().get(profiles.url("/users")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body[0],
        json!({"id": 1, "name": "João Silva", "active_since": "2021-01-10"})
    );
    assert_eq!(body.as_array().unwrap().len(), 3);

    let res = client().get(profiles.url("/users/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_orders_service() {
    let orders = start_service(role_config(Role::Orders)).await;

    let res = client().get(orders.url("/orders")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 5);

    let res = client().get(orders.url("/orders/1")).send().await.unwrap();
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({
            "id": 1,
            "user_id": 1,
            "product": "Notebook Dell",
            "amount": 3500.0,
            "status": "delivered",
            "date": "2024-01-15",
        })
    );

    let res = client().get(orders.url("/orders/user/2")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 5]);

    let res = client().get(orders.url("/orders/6")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({"error": "order not found"}));
}

#[tokio::test]
async fn test_hello_page() {
    let mut config = role_config(Role::Hello);
    config.hello.hostname = "web-7f3a".to_string();
    let hello = start_service(config).await;

    let res = client().get(hello.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let html = res.text().await.unwrap();
    assert!(html.contains("Olá do Container Servidor!"));
    assert!(html.contains("<strong>Hostname:</strong> web-7f3a"));

    let res = client().get(hello.url("/health")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].as_str().is_some());
}
