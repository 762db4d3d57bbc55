//! Handler contract.
//!
//! A handler is any value offering the single `call(context, store)`
//! operation, registered alongside its route metadata. This replaces
//! virtual-dispatch hierarchies with explicit registration of small
//! function-like units. Handlers may suspend (forwarding to external
//! subsystems), so the call returns a boxed future; plain synchronous
//! closures are adapted automatically.

use std::future::Future;
use std::pin::Pin;

use crate::dispatch::context::CallContext;
use crate::dispatch::params::ParameterStore;

/// Boxed future returned by a handler invocation.
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// A registered request handler.
///
/// The handler is expected to produce exactly one terminal response through
/// the call context before its future resolves. The dispatcher backstops
/// handlers that never respond with a Fail response.
pub trait Handler: Send + Sync {
    fn call<'a>(
        &'a self,
        ctx: &'a mut CallContext,
        store: &'a mut ParameterStore,
    ) -> HandlerFuture<'a>;
}

/// Synchronous closures are handlers: the body runs inline and the returned
/// future is already resolved.
impl<F> Handler for F
where
    F: Fn(&mut CallContext, &mut ParameterStore) + Send + Sync,
{
    fn call<'a>(
        &'a self,
        ctx: &'a mut CallContext,
        store: &'a mut ParameterStore,
    ) -> HandlerFuture<'a> {
        self(ctx, store);
        Box::pin(std::future::ready(()))
    }
}
