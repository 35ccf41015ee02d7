//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AggregatorConfig (validated, immutable)
//!     → owned by the Aggregator for its whole lifetime
//! ```
//!
//! # Design Decisions
//! - Config is immutable once an Aggregator is constructed
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::AggregatorConfig;
pub use schema::BackoffConfig;
pub use schema::RouterConfig;
