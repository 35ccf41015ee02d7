//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! aggregator. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Configuration for a single router endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouterConfig {
    /// Unique router identifier.
    pub id: String,

    /// Human-readable router name.
    pub name: String,

    /// Base endpoint URL (e.g., "https://api.example.com").
    pub endpoint: String,

    /// Per-router timeout override in milliseconds. Falls back to
    /// `default_timeout_ms` when absent.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

/// Root configuration for the aggregator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Routers participating in every fan-out round.
    pub routers: Vec<RouterConfig>,

    /// Default per-router timeout in milliseconds.
    pub default_timeout_ms: u64,

    /// Retry attempts per router after the first attempt. Applies to
    /// transport failures and timeouts only; protocol failures are final.
    pub max_retries: u32,

    /// Backoff settings between retry attempts.
    pub backoff: BackoffConfig,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            routers: Vec::new(),
            default_timeout_ms: 5000,
            max_retries: 4,
            backoff: BackoffConfig::default(),
        }
    }
}

/// Backoff configuration for retries.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackoffConfig {
    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,

    /// Maximum delay for exponential backoff in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 100,
            max_delay_ms: 2000,
        }
    }
}
