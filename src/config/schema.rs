//! Configuration schema definitions.
//!
//! This module defines the engine configuration structure. All types derive
//! Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the dispatch engine.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Declarative route-tree definitions registered at startup.
    pub routes: Vec<RouteDecl>,
}

/// One declared route tree.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteDecl {
    /// Verb marker: `GET`, `GET(SECURE)`, `POST_SECURE`, `ANY`, ...
    pub verb: String,

    /// Path tokens: plain text, `:name`, `?opt`, `?opt?`.
    pub path: Vec<String>,

    /// Name of the registered handler this tree dispatches to.
    pub handler: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
