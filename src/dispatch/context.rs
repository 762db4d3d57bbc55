//! Call context and terminal responses.
//!
//! # Responsibilities
//! - Carry per-request identity (request id, verb, path) into handlers
//! - Collect exactly one terminal response per request
//! - Model the caller's security context for tier gating
//!
//! # Design Decisions
//! - First response wins; later calls are logged and dropped
//! - Response kinds are what the transport seam consumes; the engine never
//!   interprets a handler's body beyond its status mapping

use uuid::Uuid;

use crate::dispatch::params::ParameterStore;
use crate::routing::table::Verb;

/// Security context of the caller, checked against an entry's tier.
///
/// Only an authenticated context satisfies SECURE entries. What produced the
/// authentication (sessions, tokens) is outside this engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityContext {
    Anonymous,
    Authenticated { subject: String },
}

impl SecurityContext {
    pub fn is_privileged(&self) -> bool {
        matches!(self, SecurityContext::Authenticated { .. })
    }
}

/// Terminal response of a dispatched request.
///
/// `NotFound` and `Forbidden` are produced by the dispatcher itself; the
/// remaining kinds are the handler's choice.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Plain success, no body.
    Ok,
    /// Handler-declared failure with a diagnostic message.
    Fail(String),
    /// Static string body.
    Static(String),
    /// Structured JSON body.
    Json(serde_json::Value),
    /// Ordered key/value body, e.g. an echo of the full parameter store.
    Fields(Vec<(String, String)>),
    /// No route matched the request.
    NotFound,
    /// The matched route is SECURE and the caller is not privileged.
    Forbidden,
}

impl Response {
    /// Status code for the transport seam.
    pub fn status(&self) -> u16 {
        match self {
            Response::Ok | Response::Static(_) | Response::Json(_) | Response::Fields(_) => 200,
            Response::Fail(_) => 400,
            Response::NotFound => 404,
            Response::Forbidden => 401,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == 200
    }
}

/// Per-request call context handed to the matched handler.
pub struct CallContext {
    request_id: Uuid,
    verb: Verb,
    path: String,
    response: Option<Response>,
}

impl CallContext {
    pub(crate) fn new(verb: Verb, path: &str) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            verb,
            path: path.to_string(),
            response: None,
        }
    }

    /// Unique id for this request, attached to every log line.
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Record the terminal response. The first response wins; anything after
    /// it is a handler bug, logged and dropped.
    pub fn respond(&mut self, response: Response) {
        if self.response.is_some() {
            tracing::warn!(
                request_id = %self.request_id,
                path = %self.path,
                "Handler produced more than one response; keeping the first"
            );
            return;
        }
        self.response = Some(response);
    }

    pub fn respond_ok(&mut self) {
        self.respond(Response::Ok);
    }

    pub fn respond_fail(&mut self, message: impl Into<String>) {
        self.respond(Response::Fail(message.into()));
    }

    pub fn respond_static(&mut self, body: impl Into<String>) {
        self.respond(Response::Static(body.into()));
    }

    pub fn respond_json(&mut self, value: serde_json::Value) {
        self.respond(Response::Json(value));
    }

    /// Respond with every field of the store, unchanged and in order.
    pub fn respond_fields(&mut self, store: &ParameterStore) {
        let fields = store
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.respond(Response::Fields(fields));
    }

    pub fn has_responded(&self) -> bool {
        self.response.is_some()
    }

    pub(crate) fn take_response(&mut self) -> Option<Response> {
        self.response.take()
    }
}
