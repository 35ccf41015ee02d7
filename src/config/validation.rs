//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject duplicate router ids
//! - Validate endpoint URLs and timeout values
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AggregatorConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into an Aggregator

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::schema::AggregatorConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no routers configured")]
    NoRouters,

    #[error("router at index {index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate router id: {id}")]
    DuplicateId { id: String },

    #[error("router {id}: endpoint is not a valid URL: {endpoint}")]
    InvalidEndpoint { id: String, endpoint: String },

    #[error("router {id}: timeout override must be greater than zero")]
    ZeroTimeout { id: String },

    #[error("default timeout must be greater than zero")]
    ZeroDefaultTimeout,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &AggregatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routers.is_empty() {
        errors.push(ValidationError::NoRouters);
    }

    if config.default_timeout_ms == 0 {
        errors.push(ValidationError::ZeroDefaultTimeout);
    }

    let mut seen = HashSet::new();
    for (index, router) in config.routers.iter().enumerate() {
        if router.id.is_empty() {
            errors.push(ValidationError::EmptyId { index });
        } else if !seen.insert(router.id.as_str()) {
            errors.push(ValidationError::DuplicateId {
                id: router.id.clone(),
            });
        }

        if Url::parse(&router.endpoint).is_err() {
            errors.push(ValidationError::InvalidEndpoint {
                id: router.id.clone(),
                endpoint: router.endpoint.clone(),
            });
        }

        if router.timeout_ms == Some(0) {
            errors.push(ValidationError::ZeroTimeout {
                id: router.id.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouterConfig;

    fn router(id: &str, endpoint: &str) -> RouterConfig {
        RouterConfig {
            id: id.to_string(),
            name: id.to_uppercase(),
            endpoint: endpoint.to_string(),
            timeout_ms: None,
        }
    }

    #[test]
    fn empty_router_list_is_rejected() {
        let config = AggregatorConfig::default();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NoRouters]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let config = AggregatorConfig {
            routers: vec![
                router("a", "http://x.example"),
                router("a", "http://y.example"),
            ],
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateId { id: "a".into() }));
    }

    #[test]
    fn all_errors_are_reported_together() {
        let config = AggregatorConfig {
            routers: vec![router("", "not a url")],
            default_timeout_ms: 0,
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn zero_timeout_override_is_rejected() {
        let mut bad = router("a", "http://x.example");
        bad.timeout_ms = Some(0);
        let config = AggregatorConfig {
            routers: vec![bad],
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::ZeroTimeout { id: "a".into() }]);
    }

    #[test]
    fn valid_config_passes() {
        let config = AggregatorConfig {
            routers: vec![
                router("a", "http://x.example"),
                router("b", "https://y.example/v1"),
            ],
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }
}
