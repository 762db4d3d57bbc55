//! Trellis: a route-tree matching and dispatch engine.
//!
//! # Architecture Overview
//! ```text
//! Incoming (verb, path, body fields)
//!     → routing (template match over the registered table)
//!     → captures merged into the per-request ParameterStore
//!     → dispatch (security tier gate, handler invocation)
//!     → handler writes one response via the CallContext
//!     → terminal Response returned to the transport seam
//! ```
//!
//! The transport layer, forwarded subsystems, and authentication mechanics
//! are external collaborators: the engine consumes a handler contract and
//! exposes a resolved parameter store and a response sink.

// Core subsystems
pub mod config;
pub mod dispatch;
pub mod routing;

// Cross-cutting concerns
pub mod health;
pub mod observability;

pub use config::EngineConfig;
pub use dispatch::{
    CallContext, Dispatcher, Handler, HandlerFuture, ParameterStore, Response, SecurityContext,
};
pub use routing::{
    PathTemplate, RegistrationError, RouteId, RouteTable, SecurityTier, Verb, VerbRule,
};
