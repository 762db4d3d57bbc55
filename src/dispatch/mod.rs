//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming (verb, path, request fields, security context)
//!     → dispatcher.rs (route lookup via the table)
//!     → tier gate (Forbidden before any handler runs)
//!     → params.rs (captures overlaid with request fields)
//!     → handler.rs (matched handler invoked with context + store)
//!     → context.rs (single terminal response funneled back)
//! ```

pub mod context;
pub mod dispatcher;
pub mod handler;
pub mod params;

pub use context::{CallContext, Response, SecurityContext};
pub use dispatcher::Dispatcher;
pub use handler::{Handler, HandlerFuture};
pub use params::ParameterStore;
