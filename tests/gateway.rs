mod common;

use std::time::{Duration, Instant};

use common::{
    client, downstream, role_config, start_mock_backend, start_service, start_slow_backend,
    unreachable_addr, RunningService,
};
use microservice_gateway::config::Role;
use reqwest::StatusCode;
use serde_json::{json, Value};

struct Stack {
    users: RunningService,
    orders: RunningService,
    gateway: RunningService,
}

async fn start_stack() -> Stack {
    let users = start_service(role_config(Role::Users)).await;
    let orders = start_service(role_config(Role::Orders)).await;

    let mut config = role_config(Role::Gateway);
    config.downstreams.users = users.downstream("users");
    config.downstreams.orders = orders.downstream("orders");
    let gateway = start_service(config).await;

    Stack {
        users,
        orders,
        gateway,
    }
}

#[tokio::test]
async fn test_get_user_through_gateway() {
    let stack = start_stack().await;

    let res = client().get(stack.gateway.url("/users/2")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], 2);
    assert_eq!(body["name"], "Maria Santos");
    assert_eq!(body["email"], "maria.santos@email.com");
}

#[tokio::test]
async fn test_list_users_is_forwarded_verbatim() {
    let stack = start_stack().await;

    let direct: Value = client()
        .get(stack.users.url("/users"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let through: Value = client()
        .get(stack.gateway.url("/users"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(direct, through);
    assert_eq!(through.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_orders_for_user() {
    let stack = start_stack().await;

    let res = client().get(stack.gateway.url("/orders/user/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_orders_for_unknown_user_is_empty_list() {
    let stack = start_stack().await;

    let res = client().get(stack.gateway.url("/orders/user/99")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await.unwrap(), json!([]));
}

#[tokio::test]
async fn test_get_order_through_gateway() {
    let stack = start_stack().await;

    let res = client().get(stack.gateway.url("/orders/4")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["product"], "Monitor LG 27\"");
    assert_eq!(body["status"], "shipped");
}

#[tokio::test]
async fn test_missing_records_map_to_not_found() {
    let stack = start_stack().await;

    let res = client().get(stack.gateway.url("/users/99")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({"error": "user not found"}));

    let res = client().get(stack.gateway.url("/orders/99")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({"error": "order not found"}));
}

#[tokio::test]
async fn test_non_numeric_id_is_not_found() {
    let stack = start_stack().await;

    for path in ["/users/abc", "/orders/-1", "/orders/user/x1"] {
        let res = client().get(stack.gateway.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "path {}", path);
    }
}

#[tokio::test]
async fn test_unknown_path_is_json_not_found() {
    let stack = start_stack().await;

    let res = client().get(stack.gateway.url("/products")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({"error": "not found"}));
}

#[tokio::test]
async fn test_unreachable_downstream_is_bad_gateway() {
    let orders = start_service(role_config(Role::Orders)).await;

    let mut config = role_config(Role::Gateway);
    config.downstreams.users = downstream("users", unreachable_addr());
    config.downstreams.orders = orders.downstream("orders");
    let gateway = start_service(config).await;

    let res = client().get(gateway.url("/users/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["service"], "users");
    assert_eq!(body["error"], "users unreachable");
    assert!(body.get("id").is_none(), "no partial data on failure");

    // The healthy downstream is unaffected.
    let res = client().get(gateway.url("/orders")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_downstream_server_error_is_bad_gateway() {
    let users = start_mock_backend("/users", 500, r#"{"error":"database down"}"#).await;

    let mut config = role_config(Role::Gateway);
    config.downstreams.users = downstream("users", users);
    let gateway = start_service(config).await;

    let res = client().get(gateway.url("/users")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["service"], "users");
    assert!(body["error"].as_str().unwrap().contains("database down"));
}

#[tokio::test]
async fn test_slow_downstream_times_out() {
    let users = start_slow_backend("/users", Duration::from_secs(3), "[]").await;

    let mut config = role_config(Role::Gateway);
    config.downstreams.users = downstream("users", users);
    config.downstreams.users.timeout_secs = Some(1);
    let gateway = start_service(config).await;

    let start = Instant::now();
    let res = client().get(gateway.url("/users")).send().await.unwrap();
    assert!(start.elapsed() < Duration::from_millis(2500));
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "users timeout");
}

#[tokio::test]
async fn test_request_id_is_generated_and_propagated() {
    let stack = start_stack().await;

    let res = client().get(stack.gateway.url("/users")).send().await.unwrap();
    let generated = res.headers().get("x-request-id").unwrap().to_str().unwrap();
    assert_eq!(generated.len(), 36);

    let res = client()
        .get(stack.gateway.url("/users"))
        .header("x-request-id", "trace-me-42")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers().get("x-request-id").unwrap(), "trace-me-42");
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let stack = start_stack().await;
    let addr = stack.gateway.addr;

    stack.gateway.stop().await;
    stack.users.stop().await;
    stack.orders.stop().await;

    let err = client()
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap_err();
    assert!(err.is_connect());
}

#[tokio::test]
async fn test_inbound_timeout_answers_with_json() {
    let users = start_slow_backend("/users", Duration::from_secs(3), "[]").await;

    let mut config = role_config(Role::Gateway);
    config.timeouts.request_secs = 1;
    config.downstreams.users = downstream("users", users);
    config.downstreams.users.timeout_secs = Some(10);
    let gateway = start_service(config).await;

    let res = client().get(gateway.url("/users")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
    assert!(res
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    assert!(res.headers().get("x-request-id").is_some());
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({"error": "request timed out"})
    );
}
