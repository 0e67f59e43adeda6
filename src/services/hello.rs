//! Landing page polled by the requester (`hello` role).

use axum::{
    extract::State,
    response::Html,
    Json,
};
use chrono::Local;
use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub struct HelloPage {
    hostname: String,
}

impl HelloPage {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
        }
    }

    pub fn render(&self, timestamp: &str) -> String {
        format!(
            r#"
    <html>
        <head><title>Servidor Docker</title></head>
        <body>
            <h1>Olá do Container Servidor!</h1>
            <p><strong>Timestamp:</strong> {timestamp}</p>
            <p><strong>Hostname:</strong> {hostname}</p>
            <p><strong>Status:</strong> Servidor funcionando corretamente</p>
        </body>
    </html>
    "#,
            timestamp = timestamp,
            hostname = self.hostname,
        )
    }
}

/// `GET /`
pub async fn index(State(page): State<HelloPage>) -> Html<String> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    Html(page.render(&timestamp))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Local::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_host_and_time() {
        let html = HelloPage::new("c0ffee").render("2024-01-15 10:00:00");
        assert!(html.contains("<strong>Hostname:</strong> c0ffee"));
        assert!(html.contains("<strong>Timestamp:</strong> 2024-01-15 10:00:00"));
    }
}
