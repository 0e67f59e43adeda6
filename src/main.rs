//! Microservice gateway (v1)
//!
//! One binary, one service per process, selected by `--role`.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!   Client ──────▶│           gateway            │
//!                 │  passthrough + /health fan-out│
//!                 └───────┬──────────────┬───────┘
//!                         │              │
//!                         ▼              ▼
//!                 ┌─────────────┐ ┌─────────────┐
//!                 │    users    │ │   orders    │
//!                 │  (fixtures) │ │  (fixtures) │
//!                 └─────────────┘ └─────────────┘
//!
//!                 ┌──────────────────────────────┐        ┌─────────────┐
//!   Client ──────▶│           summary            │───────▶│  profiles   │
//!                 │  /users/summary composition  │        │  (fixtures) │
//!                 └──────────────────────────────┘        └─────────────┘
//!
//!   requester ───────────────────────────────────────────▶ hello
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use microservice_gateway::config::loader::{apply_env_overrides, finalize, load_config};
use microservice_gateway::config::Role;
use microservice_gateway::observability::{logging, metrics};
use microservice_gateway::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "microservice-gateway")]
#[command(about = "Gateway fan-out demo services", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Service to run; overrides the file.
    #[arg(short, long, value_enum)]
    role: Option<Role>,

    /// Bind address; overrides the file and BIND_ADDRESS.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    if let Some(role) = cli.role {
        config.role = role;
    }
    if let Some(bind) = cli.bind {
        config.listener.bind_address = Some(bind);
    }
    let config = finalize(config)?;

    logging::init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), role = %config.role, "microservice-gateway starting");

    let bind_address = config.listener.resolve(config.role);
    tracing::info!(
        bind_address = %bind_address,
        downstream_timeout_secs = config.timeouts.downstream_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
