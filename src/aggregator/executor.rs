//! Per-router execution step.
//!
//! # Responsibilities
//! - Perform one bounded-deadline request to one router
//! - Retry transport failures within the configured budget
//! - Translate every exit path into a RouterOutcome

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::aggregator::outcome::{OutcomeKind, RouterOutcome};
use crate::aggregator::request::RequestOptions;
use crate::config::schema::{AggregatorConfig, RouterConfig};
use crate::resilience::backoff;

/// Fallback for transport errors that carry no description of their own.
const GENERIC_FAILURE: &str = "request failed";

/// Why a single attempt did not produce data.
enum AttemptError {
    /// Network-level failure or deadline abort; eligible for retry.
    Transport(String),
    /// Non-success status or undecodable body; retrying cannot help.
    Terminal(String),
}

impl AttemptError {
    fn into_message(self) -> String {
        match self {
            AttemptError::Transport(message) | AttemptError::Terminal(message) => message,
        }
    }
}

/// Run one router to settlement: attempt, retry transport failures up to
/// `max_retries`, and classify the final state as an outcome.
pub(super) async fn execute<T: DeserializeOwned>(
    client: &Client,
    config: &AggregatorConfig,
    router: &RouterConfig,
    path: &str,
    options: &RequestOptions,
) -> RouterOutcome<T> {
    // Path is appended verbatim; slash handling is the caller's contract.
    let url = format!("{}{}", router.endpoint, path);
    let deadline = Duration::from_millis(router.timeout_ms.unwrap_or(config.default_timeout_ms));

    let mut attempt = 0u32;
    loop {
        match attempt_once::<T>(client, &url, deadline, options).await {
            Ok(data) => {
                return RouterOutcome {
                    router_id: router.id.clone(),
                    observed_at_ms: now_ms(),
                    kind: OutcomeKind::Success { data },
                };
            }
            Err(error @ AttemptError::Transport(_)) if attempt < config.max_retries => {
                attempt += 1;
                let delay = backoff::retry_delay(attempt, &config.backoff);
                tracing::debug!(
                    router = %router.id,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %error.into_message(),
                    "retrying after transport failure"
                );
                tokio::time::sleep(delay).await;
            }
            Err(error) => {
                let message = error.into_message();
                tracing::warn!(router = %router.id, error = %message, "router settled as failure");
                return RouterOutcome {
                    router_id: router.id.clone(),
                    observed_at_ms: now_ms(),
                    kind: OutcomeKind::Failure { error: message },
                };
            }
        }
    }
}

/// One request/response exchange against one router, bounded by `deadline`.
async fn attempt_once<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    deadline: Duration,
    options: &RequestOptions,
) -> Result<T, AttemptError> {
    let mut request = client
        .request(options.method.clone(), url)
        .headers(options.headers.clone());
    if let Some(body) = &options.body {
        request = request.body(body.clone());
    }

    // The deadline firing drops the in-flight future, aborting only this
    // router's call; on every other path the timer is dropped with scope.
    let response = match tokio::time::timeout(deadline, request.send()).await {
        Ok(Ok(response)) => response,
        Ok(Err(error)) => return Err(AttemptError::Transport(transport_message(&error))),
        Err(_) => {
            return Err(AttemptError::Transport(format!(
                "request aborted after {}ms deadline",
                deadline.as_millis()
            )));
        }
    };

    let status = response.status();
    if !status.is_success() {
        return Err(AttemptError::Terminal(format!(
            "HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("unknown status")
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|error| AttemptError::Transport(transport_message(&error)))?;

    serde_json::from_str(&body)
        .map_err(|error| AttemptError::Terminal(format!("invalid response body: {error}")))
}

fn transport_message(error: &reqwest::Error) -> String {
    let message = error.to_string();
    if message.is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        message
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
