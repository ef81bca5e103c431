//! # Host Event Model
//!
//! Hark never touches the DOM directly. The host environment supplies events
//! through the traits in this module, which keeps every decorator testable
//! off-browser (see `hark_std::testing`) while the `web` feature implements
//! them for the `web-sys` event types.
//!
//! - [`DomEvent`] - the base readouts and propagation-control actions
//! - [`ModifierState`] - the Alt/Ctrl/Meta/Shift readouts
//! - [`KeyboardEvent`] - adds the `key` identifier
//! - [`MouseEvent`] - adds the `button` index

use bitflags::bitflags;
use std::borrow::Cow;

/// An event delivered by the host's native dispatch.
///
/// All methods take `&self`: the host event object is shared with every
/// listener on the dispatch path, and the control actions mutate host state,
/// not the Rust value.
pub trait DomEvent {
    /// Whether the user agent dispatched the event (as opposed to a script).
    fn is_trusted(&self) -> bool;

    /// Whether `target` equals `currentTarget`, i.e. the event did not bubble
    /// up from a descendant of the node the listener is attached to.
    fn targets_current(&self) -> bool;

    /// Cancels the event's default action.
    fn prevent_default(&self);

    /// Stops the event from reaching further nodes.
    fn stop_propagation(&self);

    /// Stops the event from reaching further nodes and the remaining
    /// listeners on the current node.
    fn stop_immediate_propagation(&self);
}

bitflags! {
    /// The keyboard modifier keys held while an event fired.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierKeys: u8 {
        /// Alt (Option on macOS).
        const ALT = 1 << 0;
        /// Control.
        const CTRL = 1 << 1;
        /// Meta (Command on macOS, Windows key on Windows).
        const META = 1 << 2;
        /// Shift.
        const SHIFT = 1 << 3;
    }
}

impl ModifierKeys {
    /// Builds the set from the four boolean readouts a DOM event exposes.
    pub fn from_readouts(alt: bool, ctrl: bool, meta: bool, shift: bool) -> Self {
        let mut keys = ModifierKeys::empty();
        keys.set(ModifierKeys::ALT, alt);
        keys.set(ModifierKeys::CTRL, ctrl);
        keys.set(ModifierKeys::META, meta);
        keys.set(ModifierKeys::SHIFT, shift);
        keys
    }
}

/// Events that report which modifier keys were held.
pub trait ModifierState {
    /// The modifier keys held when the event fired.
    fn modifier_keys(&self) -> ModifierKeys;
}

/// A keyboard event.
pub trait KeyboardEvent: DomEvent + ModifierState {
    /// The `KeyboardEvent.key` identifier, e.g. `"Enter"` or `"a"`.
    fn key(&self) -> Cow<'_, str>;
}

/// A mouse (or pointer) event.
pub trait MouseEvent: DomEvent + ModifierState {
    /// The `MouseEvent.button` index.
    fn button(&self) -> i16;
}

/// The mouse buttons the button decorators can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Main button, usually the left one.
    Left,
    /// Auxiliary button, usually the wheel.
    Middle,
    /// Secondary button, usually the right one.
    Right,
}

impl MouseButton {
    /// The `MouseEvent.button` index of this button.
    pub const fn index(self) -> i16 {
        match self {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
        }
    }

    /// Maps a `MouseEvent.button` index back to a button, if it is one of the three.
    pub const fn from_index(index: i16) -> Option<Self> {
        match index {
            0 => Some(MouseButton::Left),
            1 => Some(MouseButton::Middle),
            2 => Some(MouseButton::Right),
            _ => None,
        }
    }
}
