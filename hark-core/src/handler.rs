//! # Handler Layer
//!
//! A [`Handler`] is the opaque callable every other piece of Hark wraps. It
//! receives a shared reference to the event and returns nothing; the host
//! owns the event and may hand the same object to many listeners.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|event: &MyEvent| { ... }`
//! 2. **Struct implementation**: `impl Handler<MyEvent> for MyHandler`
//! 3. **Combinators**: `handler.prevent_default().once()`
//!
//! Closures passed where a `Handler` is expected need an annotated argument
//! type, since the bound is not an `Fn` bound the compiler can infer through.

use crate::{
    decorators::{Once, PreventDefault, SelfOnly, StopImmediatePropagation, StopPropagation, Trusted},
    event::{DomEvent, KeyboardEvent, MouseButton, MouseEvent},
    keys::{Button, Key},
    modifiers::{Modifiers, with_modifiers},
};
use std::{borrow::Cow, fmt};

/// An event handler.
///
/// Handlers are single-threaded: they run synchronously inside the host's
/// dispatch callback, so no `Send`/`Sync` bound is imposed.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle events of type `{E}`",
    label = "missing `Handler<{E}>` implementation",
    note = "closures must take `&{E}`; annotate the argument type, e.g. `|event: &{E}| ...`"
)]
pub trait Handler<E>: 'static {
    /// Runs the handler for one event.
    fn handle(&self, event: &E);

    /// Calls `event.prevent_default()` before running this handler.
    fn prevent_default(self) -> PreventDefault<Self>
    where
        Self: Sized,
    {
        PreventDefault::new(self)
    }

    /// Calls `event.stop_propagation()` before running this handler.
    fn stop_propagation(self) -> StopPropagation<Self>
    where
        Self: Sized,
    {
        StopPropagation::new(self)
    }

    /// Calls `event.stop_immediate_propagation()` before running this handler.
    fn stop_immediate_propagation(self) -> StopImmediatePropagation<Self>
    where
        Self: Sized,
    {
        StopImmediatePropagation::new(self)
    }

    /// Only runs this handler when the event targets the listening node itself.
    fn self_only(self) -> SelfOnly<Self>
    where
        Self: Sized,
    {
        SelfOnly::new(self)
    }

    /// Only runs this handler for user-agent dispatched events.
    fn trusted(self) -> Trusted<Self>
    where
        Self: Sized,
    {
        Trusted::new(self)
    }

    /// Runs this handler at most once.
    fn once(self) -> Once<Self>
    where
        Self: Sized,
    {
        Once::new(self)
    }

    /// Only runs this handler for the given `KeyboardEvent.key`.
    fn on_key(self, key: impl Into<Cow<'static, str>>) -> Key<Self>
    where
        Self: Sized,
        E: KeyboardEvent,
    {
        Key::new(self, key)
    }

    /// Only runs this handler for the given mouse button.
    fn on_button(self, button: MouseButton) -> Button<Self>
    where
        Self: Sized,
        E: MouseEvent,
    {
        Button::new(self, button)
    }

    /// Wraps this handler with every wrappable flag set in `modifiers`.
    ///
    /// See [`with_modifiers`].
    fn with_modifiers(self, modifiers: Modifiers) -> BoxHandler<E>
    where
        Self: Sized,
        E: DomEvent + 'static,
    {
        with_modifiers(self, modifiers)
    }

    /// Erases the handler type.
    fn boxed(self) -> BoxHandler<E>
    where
        Self: Sized,
        E: 'static,
    {
        BoxHandler::new(self)
    }
}

impl<E, F> Handler<E> for F
where
    F: Fn(&E) + 'static,
{
    fn handle(&self, event: &E) {
        (self)(event)
    }
}

/// A type-erased, owned handler.
pub struct BoxHandler<E> {
    inner: Box<dyn Handler<E>>,
}

impl<E: 'static> BoxHandler<E> {
    /// Boxes a handler.
    pub fn new<H>(handler: H) -> Self
    where
        H: Handler<E>,
    {
        Self {
            inner: Box::new(handler),
        }
    }
}

impl<E: 'static> Handler<E> for BoxHandler<E> {
    fn handle(&self, event: &E) {
        self.inner.handle(event)
    }

    fn boxed(self) -> BoxHandler<E> {
        self
    }
}

impl<E> fmt::Debug for BoxHandler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxHandler").finish_non_exhaustive()
    }
}

/// A handler that does nothing.
///
/// Used where a listener must exist only for its native options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Noop;

impl<E> Handler<E> for Noop {
    fn handle(&self, _event: &E) {}
}
