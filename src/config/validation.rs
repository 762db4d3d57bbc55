//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Compile every declared route: verb marker, template ordering, handler name
//! - Validate observability values (address parses, level is known)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: EngineConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::EngineConfig;
use crate::routing::decl;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// One semantic problem found in a configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("route {index}: {reason}")]
    Route { index: usize, reason: String },

    #[error("observability: invalid metrics address `{address}`")]
    MetricsAddress { address: String },

    #[error("observability: unknown log level `{level}`")]
    LogLevel { level: String },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &EngineConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, route) in config.routes.iter().enumerate() {
        if let Err(e) = decl::compile(route) {
            errors.push(ValidationError::Route {
                index,
                reason: e.to_string(),
            });
        }
        if route.handler.trim().is_empty() {
            errors.push(ValidationError::Route {
                index,
                reason: "handler name is empty".to_string(),
            });
        }
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::LogLevel {
            level: config.observability.log_level.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress {
            address: config.observability.metrics_address.clone(),
        });
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
    use crate::config::schema::RouteDecl;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_collected() {
        let config = EngineConfig {
            routes: vec![
                RouteDecl {
                    verb: "FETCH".into(),
                    path: vec!["tasks".into()],
                    handler: "tasks".into(),
                },
                RouteDecl {
                    verb: "GET".into(),
                    path: vec!["?opt".into(), "tail".into()],
                    handler: "  ".into(),
                },
            ],
            ..EngineConfig::default()
        };

        let errors = validate_config(&config).unwrap_err();
        // Bad verb, bad template, and empty handler all reported together.
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = EngineConfig::default();
        config.observability.metrics_address = "not-an-address".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::MetricsAddress { .. }));
    }
}
