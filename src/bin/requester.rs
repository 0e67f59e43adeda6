//! Polling client: GETs a server URL at a fixed interval and reports the
//! success ratio until interrupted.

use std::path::PathBuf;

use clap::Parser;

use microservice_gateway::config::loader::{apply_env_overrides, finalize, load_config};
use microservice_gateway::lifecycle::Shutdown;
use microservice_gateway::observability::logging;
use microservice_gateway::poller::Poller;

#[derive(Parser)]
#[command(name = "requester")]
#[command(about = "Poll an HTTP server and report success statistics", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server URL; overrides the file and SERVER_URL.
    #[arg(short, long)]
    url: Option<String>,

    /// Seconds between requests; overrides the file and INTERVAL.
    #[arg(short, long)]
    interval: Option<u64>,

    /// Stop after this many requests.
    #[arg(short = 'n', long)]
    max_requests: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    if let Some(url) = cli.url {
        config.poller.server_url = url;
    }
    if let Some(interval) = cli.interval {
        config.poller.interval_secs = interval;
    }
    if cli.max_requests.is_some() {
        config.poller.max_requests = cli.max_requests;
    }
    let config = finalize(config)?;

    logging::init_logging(&config.observability);

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let stats = Poller::new(config.poller).run(shutdown.subscribe()).await;
    tracing::info!(
        "Total: {}/{} successful requests",
        stats.successes,
        stats.requests
    );
    Ok(())
}
