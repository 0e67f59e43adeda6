//! Polling HTTP client.
//!
//! # Responsibilities
//! - GET the configured server URL once per interval
//! - Log each outcome and the running success ratio
//! - Stop on shutdown or after `max_requests`, returning the totals
//!   (an interrupted request counts as a failed attempt)
//!
//! # Design Decisions
//! - First request fires immediately, then once per tick
//! - A slow request delays the next tick instead of overlapping it

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::{self, MissedTickBehavior};

use crate::config::PollerConfig;

/// Characters of the response body echoed to the log.
pub const PREVIEW_CHARS: usize = 100;

/// Totals accumulated over a polling run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollStats {
    pub requests: u64,
    pub successes: u64,
}

/// Result of a single poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Success { status: u16, preview: String },
    ConnectionFailed,
    TimedOut,
    Failed(String),
}

impl PollOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PollOutcome::Success { .. })
    }
}

pub struct Poller {
    client: reqwest::Client,
    config: PollerConfig,
}

impl Poller {
    pub fn new(config: PollerConfig) -> Self {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client, config }
    }

    /// Issue one request and classify the outcome.
    pub async fn poll_once(&self) -> PollOutcome {
        let url = &self.config.server_url;
        tracing::info!(url = %url, "Sending request");

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status);

        let outcome = match response {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.text().await {
                    Ok(body) => PollOutcome::Success {
                        status,
                        preview: body.chars().take(PREVIEW_CHARS).collect(),
                    },
                    Err(e) => classify_error(&e),
                }
            }
            Err(e) => classify_error(&e),
        };

        match &outcome {
            PollOutcome::Success { status, preview } => {
                tracing::info!(status, "Response received");
                tracing::info!(content = %preview, "Response content");
            }
            PollOutcome::ConnectionFailed => tracing::warn!(url = %url, "Could not connect to server"),
            PollOutcome::TimedOut => tracing::warn!(url = %url, "Request timed out"),
            PollOutcome::Failed(reason) => tracing::warn!(url = %url, error = %reason, "Request failed"),
        }
        outcome
    }

    /// Poll until `shutdown` fires or `max_requests` is reached.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) -> PollStats {
        tracing::info!(
            server = %self.config.server_url,
            interval_secs = self.config.interval_secs,
            "Requester starting"
        );

        let mut stats = PollStats::default();
        let mut ticker = time::interval(Duration::from_secs(self.config.interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if self.config.max_requests.is_some_and(|max| stats.requests >= max) {
                break;
            }

            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.recv() => {
                    tracing::info!("Requester interrupted");
                    break;
                }
            }

            // Shutdown also abandons a request in flight.
            stats.requests += 1;
            let outcome = tokio::select! {
                outcome = self.poll_once() => Some(outcome),
                _ = shutdown.recv() => None,
            };
            let Some(outcome) = outcome else {
                tracing::info!("Requester interrupted during a request");
                break;
            };

            if outcome.is_success() {
                stats.successes += 1;
            }
            tracing::info!(
                request = stats.requests,
                successes = stats.successes,
                "Statistics: {}/{} successful requests",
                stats.successes,
                stats.requests
            );
        }

        tracing::info!(
            requests = stats.requests,
            successes = stats.successes,
            "Requester finished"
        );
        stats
    }
}

fn classify_error(error: &reqwest::Error) -> PollOutcome {
    if error.is_timeout() {
        PollOutcome::TimedOut
    } else if error.is_connect() {
        PollOutcome::ConnectionFailed
    } else {
        PollOutcome::Failed(error.to_string())
    }
}
