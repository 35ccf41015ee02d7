//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; no metrics endpoint in a client SDK
//! - Engine and executor emit debug events for fan-out lifecycle and warn
//!   events for per-router failures

pub mod logging;
