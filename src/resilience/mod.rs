//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to router:
//!     → executor enforces the per-attempt deadline
//!     → on transport failure or timeout: backoff.rs computes the retry delay
//!     → protocol failures are never retried
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every router call has a deadline
//! - Jittered backoff prevents thundering herd across retries
//! - Retry budget is bounded by `max_retries` per router per round

pub mod backoff;
