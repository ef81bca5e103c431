//! # Handler Decorators
//!
//! Each decorator wraps one handler and adds exactly one side effect or one
//! guard before delegating. Side-effect decorators always delegate; guard
//! decorators that decline do nothing at all, so the event continues its
//! native propagation unaffected.
//!
//! | Decorator | Before delegating | Delegates when |
//! |---|---|---|
//! | [`PreventDefault`] | `event.prevent_default()` | always |
//! | [`StopPropagation`] | `event.stop_propagation()` | always |
//! | [`StopImmediatePropagation`] | `event.stop_immediate_propagation()` | always |
//! | [`SelfOnly`] | - | `target == currentTarget` |
//! | [`Trusted`] | - | `event.is_trusted()` |
//! | [`Once`] | - | first invocation only |
//!
//! The key and mouse-button guards live in [`crate::keys`].

use crate::{event::DomEvent, handler::Handler};
use std::cell::Cell;

/// Calls `event.prevent_default()` before running the handler.
#[derive(Debug, Clone)]
pub struct PreventDefault<H> {
    inner: H,
}

impl<H> PreventDefault<H> {
    /// Wraps `inner`.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<E, H> Handler<E> for PreventDefault<H>
where
    E: DomEvent,
    H: Handler<E>,
{
    fn handle(&self, event: &E) {
        event.prevent_default();
        self.inner.handle(event);
    }
}

/// Calls `event.stop_propagation()`, preventing the event reaching the next node.
#[derive(Debug, Clone)]
pub struct StopPropagation<H> {
    inner: H,
}

impl<H> StopPropagation<H> {
    /// Wraps `inner`.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<E, H> Handler<E> for StopPropagation<H>
where
    E: DomEvent,
    H: Handler<E>,
{
    fn handle(&self, event: &E) {
        event.stop_propagation();
        self.inner.handle(event);
    }
}

/// Calls `event.stop_immediate_propagation()`, preventing other listeners of
/// the same event from firing.
#[derive(Debug, Clone)]
pub struct StopImmediatePropagation<H> {
    inner: H,
}

impl<H> StopImmediatePropagation<H> {
    /// Wraps `inner`.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<E, H> Handler<E> for StopImmediatePropagation<H>
where
    E: DomEvent,
    H: Handler<E>,
{
    fn handle(&self, event: &E) {
        event.stop_immediate_propagation();
        self.inner.handle(event);
    }
}

/// Only runs the handler if the event's target is the listening node itself.
#[derive(Debug, Clone)]
pub struct SelfOnly<H> {
    inner: H,
}

impl<H> SelfOnly<H> {
    /// Wraps `inner`.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<E, H> Handler<E> for SelfOnly<H>
where
    E: DomEvent,
    H: Handler<E>,
{
    fn handle(&self, event: &E) {
        if !event.targets_current() {
            return;
        }
        self.inner.handle(event);
    }
}

/// Only runs the handler if the event was dispatched by the user agent.
#[derive(Debug, Clone)]
pub struct Trusted<H> {
    inner: H,
}

impl<H> Trusted<H> {
    /// Wraps `inner`.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<E, H> Handler<E> for Trusted<H>
where
    E: DomEvent,
    H: Handler<E>,
{
    fn handle(&self, event: &E) {
        if !event.is_trusted() {
            return;
        }
        self.inner.handle(event);
    }
}

/// Runs the handler on the first invocation only; later invocations are dropped.
///
/// The flag belongs to this wrapper alone. Wrapping the same handler twice
/// yields two independent gates.
#[derive(Debug)]
pub struct Once<H> {
    inner: H,
    fired: Cell<bool>,
}

impl<H> Once<H> {
    /// Wraps `inner`.
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            fired: Cell::new(false),
        }
    }

    /// Whether the wrapped handler has already run.
    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

impl<E, H> Handler<E> for Once<H>
where
    H: Handler<E>,
{
    fn handle(&self, event: &E) {
        // Flipped before delegating so a re-entrant dispatch is also dropped.
        if self.fired.replace(true) {
            return;
        }
        self.inner.handle(event);
    }
}

/// Calls `event.prevent_default()` before running `handler`.
pub fn prevent_default<H>(handler: H) -> PreventDefault<H> {
    PreventDefault::new(handler)
}

/// Calls `event.stop_propagation()` before running `handler`.
pub fn stop_propagation<H>(handler: H) -> StopPropagation<H> {
    StopPropagation::new(handler)
}

/// Calls `event.stop_immediate_propagation()` before running `handler`.
pub fn stop_immediate_propagation<H>(handler: H) -> StopImmediatePropagation<H> {
    StopImmediatePropagation::new(handler)
}

/// Only runs `handler` when `target == currentTarget`.
pub fn self_only<H>(handler: H) -> SelfOnly<H> {
    SelfOnly::new(handler)
}

/// Only runs `handler` for trusted events.
pub fn trusted<H>(handler: H) -> Trusted<H> {
    Trusted::new(handler)
}

/// Runs `handler` at most once.
pub fn once<H>(handler: H) -> Once<H> {
    Once::new(handler)
}
