//! Logging decorator for handler observation.

use hark_core::Handler;

/// Emits a `trace` record naming the handler each time it runs.
///
/// Without the `tracing` feature this is a plain pass-through.
#[derive(Debug, Clone)]
pub struct Logged<H> {
    inner: H,
    name: &'static str,
}

impl<H> Logged<H> {
    /// Wraps `inner` under `name`.
    pub const fn new(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The name records are tagged with.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<E, H> Handler<E> for Logged<H>
where
    H: Handler<E>,
{
    fn handle(&self, event: &E) {
        #[cfg(feature = "tracing")]
        {
            let _span = tracing::trace_span!("handle", handler = %self.name).entered();
            tracing::trace!("handling event");
            self.inner.handle(event);
        }
        #[cfg(not(feature = "tracing"))]
        {
            self.inner.handle(event);
        }
    }
}

/// Wraps `handler` in a [`Logged`] decorator.
pub fn logged<H>(handler: H, name: &'static str) -> Logged<H> {
    Logged::new(handler, name)
}
