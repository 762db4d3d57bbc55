//! Request lifecycle dispatcher.
//!
//! # Responsibilities
//! - Resolve the incoming (verb, path) against the route table
//! - Enforce the matched entry's security tier before any handler code runs
//! - Populate the parameter store: captures first, request fields on top
//! - Invoke the handler and guarantee exactly one terminal response
//!
//! # Design Decisions
//! - NotFound and Forbidden are routine control flow, never errors
//! - The table snapshot is read once per request; no lock is held across
//!   handler invocation
//! - Request fields overlay same-named captures: explicit beats positional

use std::sync::Arc;
use std::time::Instant;

use crate::dispatch::context::{CallContext, Response, SecurityContext};
use crate::dispatch::params::ParameterStore;
use crate::observability::metrics;
use crate::routing::matcher::split_path;
use crate::routing::table::{RouteTable, SecurityTier, Verb};

/// Dispatches one request at a time through the lifecycle
/// `RECEIVED → MATCHED → AUTHORIZED → INVOKED → RESPONDED`, with rejection
/// exits to NotFound and Forbidden. Requests are independent; a dispatcher
/// may be shared freely across concurrent workers.
pub struct Dispatcher {
    table: Arc<RouteTable>,
}

impl Dispatcher {
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    /// Dispatch one request and return its terminal response.
    pub async fn dispatch(
        &self,
        verb: Verb,
        path: &str,
        security: &SecurityContext,
        request_fields: &[(String, String)],
    ) -> Response {
        let start = Instant::now();
        let segments = split_path(path);

        let Some((entry, captures)) = self.table.lookup(verb, &segments) else {
            tracing::debug!(verb = %verb, path = %path, "No route matched");
            metrics::record_dispatch(verb.as_str(), "not_found", start);
            return Response::NotFound;
        };

        if entry.tier == SecurityTier::Secure && !security.is_privileged() {
            tracing::warn!(
                verb = %verb,
                path = %path,
                route = %entry.template,
                "Unauthorized request to secure route rejected"
            );
            metrics::record_dispatch(verb.as_str(), "forbidden", start);
            return Response::Forbidden;
        }

        let mut store = ParameterStore::new();
        for (key, value) in captures {
            store.set(key, value);
        }
        // Request-supplied fields win over same-named captures.
        for (key, value) in request_fields {
            store.set(key.clone(), value.clone());
        }

        let mut ctx = CallContext::new(verb, path);
        tracing::debug!(
            request_id = %ctx.request_id(),
            verb = %verb,
            path = %path,
            route = %entry.template,
            "Invoking handler"
        );

        entry.handler().call(&mut ctx, &mut store).await;

        let response = match ctx.take_response() {
            Some(response) => response,
            None => {
                tracing::warn!(
                    request_id = %ctx.request_id(),
                    route = %entry.template,
                    "Handler returned without responding"
                );
                Response::Fail("handler produced no response".to_string())
            }
        };

        let outcome = if response.is_success() { "ok" } else { "fail" };
        metrics::record_dispatch(verb.as_str(), outcome, start);
        response
    }
}
