//! Fan-out aggregation subsystem.
//!
//! # Data Flow
//! ```text
//! aggregate(path, options)
//!     → engine.rs (one executor future per router, single join point)
//!     → executor.rs (deadline + retry + outcome classification per router)
//!     → outcome.rs (settlements folded into AggregateResult)
//! ```
//!
//! # Design Decisions
//! - All-settlement semantics; never first-success or first-failure
//! - Output order always matches configured router order
//! - Per-router failures become outcomes, never call-level errors
//! - A router's deadline cancels only its own in-flight call

pub mod engine;
mod executor;
pub mod outcome;
pub mod request;

pub use engine::Aggregator;
pub use outcome::{AggregateResult, OutcomeKind, RouterOutcome};
pub use request::RequestOptions;
