//! Keyboard-key and mouse-button guards, and the modifier-key predicate they share.

use crate::{
    event::{KeyboardEvent, ModifierKeys, ModifierState, MouseButton, MouseEvent},
    handler::Handler,
};
use std::borrow::Cow;

/// Which modifier keys an event must carry, and how strictly.
///
/// - **Any-of** (default): every requested key must be held; other keys may
///   or may not be held.
/// - **Exact**: the held keys must equal the requested set, no more, no less.
///   An empty exact match therefore requires that no modifier key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierMatch {
    keys: ModifierKeys,
    exact: bool,
}

impl ModifierMatch {
    /// Requires at least `keys`.
    pub const fn any_of(keys: ModifierKeys) -> Self {
        Self { keys, exact: false }
    }

    /// Requires exactly `keys`.
    pub const fn exact(keys: ModifierKeys) -> Self {
        Self { keys, exact: true }
    }

    /// The requested keys.
    pub const fn keys(&self) -> ModifierKeys {
        self.keys
    }

    /// Whether this is an exact match.
    pub const fn is_exact(&self) -> bool {
        self.exact
    }

    /// Tests a set of held keys.
    pub fn matches(&self, held: ModifierKeys) -> bool {
        if self.exact {
            held == self.keys
        } else {
            held.contains(self.keys)
        }
    }

    /// Tests the keys held during `event`.
    pub fn matches_event<E>(&self, event: &E) -> bool
    where
        E: ModifierState + ?Sized,
    {
        self.matches(event.modifier_keys())
    }
}

/// Only runs the handler for one `KeyboardEvent.key`, optionally with modifiers.
#[derive(Debug, Clone)]
pub struct Key<H> {
    inner: H,
    key: Cow<'static, str>,
    modifiers: ModifierMatch,
}

impl<H> Key<H> {
    /// Wraps `inner`; any modifier state is accepted until [`Key::matching`] is called.
    pub fn new(inner: H, key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            key: key.into(),
            modifiers: ModifierMatch::default(),
        }
    }

    /// Also requires the given modifier keys.
    pub fn matching(mut self, modifiers: ModifierMatch) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// The key identifier this guard accepts.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<E, H> Handler<E> for Key<H>
where
    E: KeyboardEvent,
    H: Handler<E>,
{
    fn handle(&self, event: &E) {
        if event.key() != self.key {
            return;
        }
        if !self.modifiers.matches_event(event) {
            return;
        }
        self.inner.handle(event);
    }
}

/// Only runs the handler for one mouse button, optionally with modifiers.
#[derive(Debug, Clone)]
pub struct Button<H> {
    inner: H,
    button: MouseButton,
    modifiers: Option<ModifierMatch>,
}

impl<H> Button<H> {
    /// Wraps `inner`.
    pub fn new(inner: H, button: MouseButton) -> Self {
        Self {
            inner,
            button,
            modifiers: None,
        }
    }

    /// Also requires the given modifier keys.
    pub fn matching(mut self, modifiers: ModifierMatch) -> Self {
        self.modifiers = Some(modifiers);
        self
    }

    /// The button this guard accepts.
    pub fn button(&self) -> MouseButton {
        self.button
    }
}

impl<E, H> Handler<E> for Button<H>
where
    E: MouseEvent,
    H: Handler<E>,
{
    fn handle(&self, event: &E) {
        if event.button() != self.button.index() {
            return;
        }
        if let Some(modifiers) = &self.modifiers
            && !modifiers.matches_event(event)
        {
            return;
        }
        self.inner.handle(event);
    }
}

/// Only runs `handler` when `KeyboardEvent.key` equals `key`.
pub fn key<H>(handler: H, key: impl Into<Cow<'static, str>>) -> Key<H> {
    Key::new(handler, key)
}

/// Only runs `handler` for the main (left) button.
pub fn left<H>(handler: H) -> Button<H> {
    Button::new(handler, MouseButton::Left)
}

/// Only runs `handler` for the auxiliary (middle) button.
pub fn middle<H>(handler: H) -> Button<H> {
    Button::new(handler, MouseButton::Middle)
}

/// Only runs `handler` for the secondary (right) button.
pub fn right<H>(handler: H) -> Button<H> {
    Button::new(handler, MouseButton::Right)
}
