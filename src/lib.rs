//! Router Aggregator SDK
//!
//! Fan-out request client: issue one logical request to every configured
//! router concurrently, bound each by a deadline, and fold all settlements
//! into a single result.
//!
//! ```no_run
//! use router_aggregator::{Aggregator, AggregatorConfig, RequestOptions, RouterConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let aggregator = Aggregator::new(AggregatorConfig {
//!     routers: vec![RouterConfig {
//!         id: "relay".into(),
//!         name: "Relay".into(),
//!         endpoint: "https://api.relay.example".into(),
//!         timeout_ms: None,
//!     }],
//!     ..Default::default()
//! })?;
//!
//! let result = aggregator
//!     .aggregate::<serde_json::Value>("/v1/quote", &RequestOptions::get())
//!     .await;
//!
//! for outcome in result.succeeded() {
//!     println!("{}: {:?}", outcome.router_id, outcome.data());
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod config;
pub mod observability;
pub mod resilience;
pub mod types;

pub use aggregator::{AggregateResult, Aggregator, OutcomeKind, RequestOptions, RouterOutcome};
pub use config::{AggregatorConfig, BackoffConfig, ConfigError, RouterConfig};
