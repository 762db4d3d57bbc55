//! Shared helpers for integration tests.
//!
//! The handlers here stand in for the external collaborators the engine
//! forwards to: an environment store (the "set parameter" subsystem) and an
//! address validator that echoes every field of a record unchanged.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use trellis::{CallContext, Handler, ParameterStore};

/// In-memory stand-in for the process environment subsystem.
#[derive(Default)]
pub struct Environment {
    values: Mutex<HashMap<String, String>>,
}

impl Environment {
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("environment mutex poisoned")
            .get(key)
            .cloned()
    }

    pub fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .expect("environment mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.values.lock().expect("environment mutex poisoned").len()
    }
}

/// Handler that writes `name`/`value` from the store into the environment.
/// Missing `name` is a handler-level failure, not a dispatch error.
pub fn set_param_handler(env: Arc<Environment>) -> Arc<dyn Handler> {
    Arc::new(move |ctx: &mut CallContext, store: &mut ParameterStore| {
        let Some(name) = store.get("name").filter(|n| !n.is_empty()) else {
            ctx.respond_fail("missing required field: name");
            return;
        };
        let value = store.get("value").unwrap_or_default();
        env.set(name, value);
        ctx.respond_ok();
    })
}

/// Handler that forwards every field of the store back, unchanged and in
/// order, the way the address-validation forwarding route does.
pub fn echo_handler() -> Arc<dyn Handler> {
    Arc::new(|ctx: &mut CallContext, store: &mut ParameterStore| {
        ctx.respond_fields(store);
    })
}
