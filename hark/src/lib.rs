//! # hark - Declarative DOM Event Listener Modifiers
//!
//! `hark` attaches event listeners with declarative modifiers (prevent
//! default, stop propagation, once, self, trusted, key and mouse-button
//! filters) and composes handlers. It is a thin layer over the host's native
//! listener registration.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hark::{prelude::*, events};
//!
//! let target = WebTarget::new(&element);
//! let mut listeners = attach(&target, events! {
//!     "click" => EventParams::func(|event: &web_sys::Event| on_click(event)),
//!     "submit" => EventParams::handler(on_submit).with_modifiers("preventDefault|once".parse()?),
//!     "touchstart" => EventParams::modifiers(Modifiers::PASSIVE),
//! })?;
//!
//! // later
//! listeners.detach();
//! ```
//!
//! ## Standalone decorators
//!
//! ```rust,ignore
//! let on_enter = key(submit, "Enter").matching(ModifierMatch::exact(ModifierKeys::empty()));
//! let on_context = right(open_menu).prevent_default();
//! let guarded = with_modifiers(handler, Modifiers::SELF | Modifiers::TRUSTED);
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use hark_core::{
    BoxHandler, Button, DomEvent, EventTarget, Handler, HarkError, Key, KeyboardEvent,
    ListenerOptions, ModifierKeys, ModifierMatch, ModifierState, Modifiers, MouseButton,
    MouseEvent, Noop, Once, PreventDefault, SelfOnly, StopImmediatePropagation, StopPropagation,
    Trusted, key, left, middle, once, prevent_default, right, self_only,
    stop_immediate_propagation, stop_propagation, trusted, with_modifiers,
};

// `compose` brings both the function and the macro.
pub use hark_std::{
    Compose, EventMap, EventParams, Listeners, Logged, Resolved, attach, compose, events, logged,
};

/// Browser backend.
#[cfg(feature = "web")]
pub mod web {
    pub use hark_core::web::{WebListener, WebTarget};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use hark_std::testing::*;
}

/// Prelude module - common imports for Hark.
///
/// # Usage
///
/// ```rust,ignore
/// use hark::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        DomEvent, EventMap, EventParams, EventTarget, Handler, HarkError, KeyboardEvent,
        Listeners, ModifierKeys, ModifierMatch, Modifiers, MouseButton, MouseEvent, attach,
        compose, key, left, middle, right, with_modifiers,
    };

    #[cfg(feature = "web")]
    pub use crate::web::WebTarget;
}
