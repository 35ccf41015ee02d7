//! Outcome types for one fan-out round.

use std::collections::HashMap;

use serde::Serialize;

/// Terminal result of one router's attempt. Never left pending: every
/// router settles as exactly one success or one failure per round.
#[derive(Debug, Clone, Serialize)]
pub struct RouterOutcome<T> {
    /// Id of the router that produced this outcome.
    pub router_id: String,

    /// Unix epoch milliseconds at which the outcome was observed.
    pub observed_at_ms: u64,

    /// Success or failure payload.
    #[serde(flatten)]
    pub kind: OutcomeKind<T>,
}

/// The two shapes an outcome can take.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeKind<T> {
    /// The router answered with a success status and a decodable body.
    Success { data: T },
    /// Transport failure, timeout, non-success status, or undecodable body.
    Failure { error: String },
}

impl<T> RouterOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self.kind, OutcomeKind::Success { .. })
    }

    /// Decoded response body, present only on success.
    pub fn data(&self) -> Option<&T> {
        match &self.kind {
            OutcomeKind::Success { data } => Some(data),
            OutcomeKind::Failure { .. } => None,
        }
    }

    /// Error message, present only on failure.
    pub fn error(&self) -> Option<&str> {
        match &self.kind {
            OutcomeKind::Success { .. } => None,
            OutcomeKind::Failure { error } => Some(error),
        }
    }
}

/// Envelope combining all outcomes and timing for one fan-out round.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult<T> {
    /// Every router's outcome, in configured router order.
    pub all: Vec<RouterOutcome<T>>,

    /// Wall-clock duration of the whole round in milliseconds.
    pub elapsed_ms: u64,
}

impl<T> AggregateResult<T> {
    /// Successful outcomes, in configured router order.
    pub fn succeeded(&self) -> Vec<&RouterOutcome<T>> {
        self.all.iter().filter(|o| o.is_success()).collect()
    }

    /// Failed outcomes, in configured router order.
    pub fn failed(&self) -> Vec<&RouterOutcome<T>> {
        self.all.iter().filter(|o| !o.is_success()).collect()
    }

    /// The success observed earliest, if any router succeeded.
    pub fn fastest_success(&self) -> Option<&RouterOutcome<T>> {
        self.all
            .iter()
            .filter(|o| o.is_success())
            .min_by_key(|o| o.observed_at_ms)
    }

    /// The outcome observed last, success or failure.
    pub fn latest(&self) -> Option<&RouterOutcome<T>> {
        self.all.iter().max_by_key(|o| o.observed_at_ms)
    }

    /// Percentage of routers that succeeded, 0.0 for an empty round.
    pub fn success_rate(&self) -> f64 {
        if self.all.is_empty() {
            return 0.0;
        }
        self.succeeded().len() as f64 / self.all.len() as f64 * 100.0
    }

    /// Outcomes grouped by router id. Duplicate-free configs produce
    /// single-element groups; the map shape matches the wire format used
    /// by dashboard consumers.
    pub fn by_router(&self) -> HashMap<&str, Vec<&RouterOutcome<T>>> {
        let mut groups: HashMap<&str, Vec<&RouterOutcome<T>>> = HashMap::new();
        for outcome in &self.all {
            groups
                .entry(outcome.router_id.as_str())
                .or_default()
                .push(outcome);
        }
        groups
    }
}
