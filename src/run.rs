//! Application execution logic.
//!
//! This module contains the serial poll loop that drives the agent and
//! logs each outcome.

use std::time::Duration;

use thiserror::Error;
use tokio::signal;
use tokio::time::MissedTickBehavior;

use checkip_agent::agent::{Agent, AgentError, ChangeEvent, ChangeHandler};
use checkip_agent::config::{SinkConfig, ValidatedConfig, WebhookConfig};
use checkip_agent::resolver::{HttpResolver, Resolver};
use checkip_agent::transport::{HttpError, ReqwestClient};
use checkip_agent::webhook::{DryRunHandler, HttpWebhook};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] HttpError),

    /// A single check failed (only fatal in `--once` mode).
    #[error("Check failed: {0}")]
    Check(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Runtime options extracted from validated config.
#[derive(Debug, Clone, Copy)]
struct RuntimeOptions {
    poll_interval: Duration,
    once: bool,
}

impl From<&ValidatedConfig> for RuntimeOptions {
    fn from(config: &ValidatedConfig) -> Self {
        Self {
            poll_interval: config.poll_interval,
            once: config.once,
        }
    }
}

/// Executes the application.
///
/// This function:
/// 1. Creates one HTTP client shared by the resolver and webhook
/// 2. Creates the resolver and the configured sink
/// 3. Runs one check (`--once`) or polls until a shutdown signal
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, or if the single
/// check fails in `--once` mode.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let options = RuntimeOptions::from(&config);

    let client = ReqwestClient::with_timeout(config.timeout).map_err(RunError::HttpClient)?;
    let resolver = HttpResolver::new(client.clone(), config.resolver);

    match config.sink {
        SinkConfig::DryRun => {
            tracing::info!("Dry-run mode enabled - changes will be logged but not sent");
            drive(Agent::new(resolver, DryRunHandler), options).await
        }
        SinkConfig::Webhook(webhook) => {
            drive(Agent::new(resolver, create_webhook(client, webhook)), options).await
        }
    }
}

/// Creates the HTTP webhook sender from configuration.
fn create_webhook(client: ReqwestClient, config: WebhookConfig) -> HttpWebhook<ReqwestClient> {
    let mut webhook = HttpWebhook::new(client, config.url)
        .with_method(config.method)
        .with_headers(config.headers);

    if let Some(template) = config.body_template {
        webhook = webhook.with_body_template(template);
    }

    webhook
}

/// Runs once or polls, depending on options.
///
/// Excluded from coverage - requires signal handling.
#[cfg(not(tarpaulin_include))]
async fn drive<R: Resolver, H: ChangeHandler>(
    mut agent: Agent<R, H>,
    options: RuntimeOptions,
) -> Result<(), RunError> {
    if options.once {
        return check(&mut agent)
            .await
            .map(|_| ())
            .map_err(|e| RunError::Check(Box::new(e)));
    }

    tracing::info!("Polling every {}s", options.poll_interval.as_secs());

    let mut ticker = tokio::time::interval(options.poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping...");
                return Ok(());
            }

            _ = ticker.tick() => {
                // Failures are retried by the next tick.
                if let Err(e) = check(&mut agent).await {
                    tracing::error!("Check failed: {e}");
                }
            }
        }
    }
}

/// Runs the agent once and logs the outcome.
async fn check<R: Resolver, H: ChangeHandler>(
    agent: &mut Agent<R, H>,
) -> Result<Option<ChangeEvent>, AgentError<H::Error>> {
    let outcome = agent.run().await?;

    match &outcome {
        Some(event) if event.is_first() => {
            tracing::info!("Public address is {}", event.new_address());
        }
        Some(event) => {
            tracing::info!("Public address changed: {event}");
        }
        None => {
            tracing::debug!("Public address unchanged ({})", agent.current_address());
        }
    }

    Ok(outcome)
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
