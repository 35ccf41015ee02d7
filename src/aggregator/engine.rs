//! Core fan-out logic: one request to every router, all settlements folded
//! into a single result.

use std::time::Instant;

use futures_util::future::join_all;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::aggregator::executor;
use crate::aggregator::outcome::{AggregateResult, RouterOutcome};
use crate::aggregator::request::RequestOptions;
use crate::config::loader::ConfigError;
use crate::config::schema::{AggregatorConfig, RouterConfig};
use crate::config::validation::validate_config;

/// Fan-out client over a fixed set of routers.
///
/// The router list is immutable for the lifetime of the aggregator and is
/// shared read-only across concurrent rounds; no state persists between
/// calls to [`Aggregator::aggregate`].
#[derive(Debug, Clone)]
pub struct Aggregator {
    config: AggregatorConfig,
    client: Client,
}

impl Aggregator {
    /// Create an aggregator from a configuration.
    ///
    /// Fails fast on semantic problems (empty router list, duplicate ids,
    /// malformed endpoints), reporting every problem found rather than the
    /// first.
    pub fn new(config: AggregatorConfig) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;
        let client = Client::builder().build()?;

        Ok(Self { config, client })
    }

    /// Router descriptors, in fan-out order.
    pub fn routers(&self) -> &[RouterConfig] {
        &self.config.routers
    }

    /// Issue one logical request to every configured router concurrently
    /// and wait for all of them to settle.
    ///
    /// `path` is appended verbatim to each router's base endpoint. Every
    /// per-router failure (timeout, transport error, non-success status,
    /// undecodable body) is captured as an outcome in the result; the call
    /// itself never fails and a slow router never stalls or cancels its
    /// siblings.
    pub async fn aggregate<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> AggregateResult<T> {
        let started = Instant::now();
        tracing::debug!(
            routers = self.config.routers.len(),
            path,
            "fan-out round started"
        );

        let attempts = self.config.routers.iter().map(|router| {
            executor::execute::<T>(&self.client, &self.config, router, path, options)
        });

        // Single join point. Outcomes come back in router order no matter
        // which response physically arrives first.
        let all: Vec<RouterOutcome<T>> = join_all(attempts).await;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        tracing::debug!(
            total = all.len(),
            succeeded = all.iter().filter(|o| o.is_success()).count(),
            elapsed_ms,
            "fan-out round settled"
        );

        AggregateResult { all, elapsed_ms }
    }
}
