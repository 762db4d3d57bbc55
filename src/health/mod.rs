//! Readiness probing.
//!
//! An optional zero-argument callback answers the readiness route. Its
//! string result is returned verbatim as a static response; an empty result
//! or an absent callback both default to "OK".

use std::sync::Arc;

use crate::dispatch::context::CallContext;
use crate::dispatch::params::ParameterStore;
use crate::routing::table::{RouteId, RouteTable, SecurityTier, Verb, VerbRule};
use crate::routing::template::RegistrationError;

/// Route key the probe handler is mounted under. The spelling is the
/// framework's historical route name, preserved for compatibility.
pub const READINESS_ROUTE: &str = "readyness";

type ProbeFn = dyn Fn() -> String + Send + Sync;

/// Readiness probe with an optional callback.
pub struct ReadinessProbe {
    callback: Option<Box<ProbeFn>>,
}

impl ReadinessProbe {
    /// A probe with no callback; always reports "OK".
    pub fn new() -> Self {
        Self { callback: None }
    }

    pub fn with_callback<F>(callback: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    /// Evaluate the probe. Empty callback results default to "OK".
    pub fn check(&self) -> String {
        match &self.callback {
            Some(callback) => {
                let result = callback();
                if result.is_empty() {
                    "OK".to_string()
                } else {
                    result
                }
            }
            None => "OK".to_string(),
        }
    }
}

impl Default for ReadinessProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Register the readiness route on the table, answering GET with the
/// probe's result as a static body.
pub fn mount(table: &RouteTable, probe: Arc<ReadinessProbe>) -> Result<RouteId, RegistrationError> {
    table.register(
        VerbRule::Only(Verb::Get),
        SecurityTier::Public,
        [READINESS_ROUTE],
        Arc::new(move |ctx: &mut CallContext, _store: &mut ParameterStore| {
            ctx.respond_static(probe.check());
        }),
    )
}
