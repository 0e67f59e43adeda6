//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{header::CONTENT_TYPE, StatusCode};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use microservice_gateway::config::{DownstreamConfig, GatewayConfig, Role};
use microservice_gateway::{HttpServer, Shutdown};

/// A service role running on an ephemeral port.
pub struct RunningService {
    pub addr: SocketAddr,
    shutdown: Shutdown,
    handle: JoinHandle<std::io::Result<()>>,
}

impl RunningService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn downstream(&self, name: &str) -> DownstreamConfig {
        downstream(name, self.addr)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        let result = tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("server did not stop in time")
            .expect("server task panicked");
        result.expect("server returned an error");
    }
}

/// Default configuration for `role`.
pub fn role_config(role: Role) -> GatewayConfig {
    GatewayConfig {
        role,
        ..GatewayConfig::default()
    }
}

/// Start `config` through the real server stack on 127.0.0.1.
pub async fn start_service(mut config: GatewayConfig) -> RunningService {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = Some(addr.to_string());

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    RunningService {
        addr,
        shutdown,
        handle,
    }
}

/// Serve an arbitrary router on 127.0.0.1 and return its address.
pub async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Start a programmable mock backend answering GET `path` with whatever `f` yields.
pub async fn start_programmable_backend<F, Fut>(path: &'static str, f: F) -> SocketAddr
where
    F: Fn() -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let router = Router::new().route(
        path,
        get(move || {
            let f = f.clone();
            async move {
                let (status, body) = f().await;
                let status = StatusCode::from_u16(status).unwrap();
                (status, [(CONTENT_TYPE, "application/json")], body)
            }
        }),
    );
    serve(router).await
}

/// Start a mock backend that always returns a fixed response.
pub async fn start_mock_backend(path: &'static str, status: u16, body: &'static str) -> SocketAddr {
    start_programmable_backend(path, move || async move { (status, body.to_string()) }).await
}

/// Start a mock backend that answers `path` only after `delay`.
pub async fn start_slow_backend(path: &'static str, delay: Duration, body: &'static str) -> SocketAddr {
    start_programmable_backend(path, move || async move {
        tokio::time::sleep(delay).await;
        (200, body.to_string())
    })
    .await
}

/// An address with nothing listening on it.
pub fn unreachable_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

pub fn downstream(name: &str, addr: SocketAddr) -> DownstreamConfig {
    DownstreamConfig::new(name, format!("http://{}", addr))
}

/// HTTP client for driving the services under test.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
