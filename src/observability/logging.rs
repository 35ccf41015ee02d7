//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem for host applications
//! - Configure log level from the environment
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Library code only emits events; hosts decide the subscriber
//! - RUST_LOG wins over the supplied default level

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber with env-filter support.
///
/// `default_level` applies when `RUST_LOG` is not set. Safe to call when a
/// subscriber is already installed; the existing one is kept.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
