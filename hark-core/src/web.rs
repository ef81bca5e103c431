//! Browser backend built on `web-sys`.
//!
//! Implements the event traits for the `web-sys` event types and provides
//! [`WebTarget`], an [`EventTarget`](crate::EventTarget) over any DOM node.
//!
//! ```rust,ignore
//! use hark_core::{Handler, web::WebTarget};
//!
//! let button: web_sys::HtmlElement = /* ... */;
//! let target = WebTarget::<web_sys::MouseEvent>::new(&button);
//! ```

use crate::{
    error::HarkError,
    event::{
        DomEvent, KeyboardEvent as HarkKeyboardEvent, ModifierKeys, ModifierState,
        MouseEvent as HarkMouseEvent,
    },
    handler::{BoxHandler, Handler},
    modifiers::ListenerOptions,
    target::EventTarget as HarkEventTarget,
};
use std::{borrow::Cow, fmt, marker::PhantomData};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::AddEventListenerOptions;

fn base<T: AsRef<web_sys::Event>>(event: &T) -> &web_sys::Event {
    event.as_ref()
}

macro_rules! impl_dom_event {
    ($($ty:ty),+ $(,)?) => {$(
        impl DomEvent for $ty {
            fn is_trusted(&self) -> bool {
                base(self).is_trusted()
            }

            fn targets_current(&self) -> bool {
                let event = base(self);
                event.target() == event.current_target()
            }

            fn prevent_default(&self) {
                base(self).prevent_default()
            }

            fn stop_propagation(&self) {
                base(self).stop_propagation()
            }

            fn stop_immediate_propagation(&self) {
                base(self).stop_immediate_propagation()
            }
        }
    )+};
}

impl_dom_event!(
    web_sys::Event,
    web_sys::KeyboardEvent,
    web_sys::MouseEvent,
    web_sys::PointerEvent,
    web_sys::WheelEvent,
);

fn keyboard_modifiers(event: &web_sys::KeyboardEvent) -> ModifierKeys {
    ModifierKeys::from_readouts(
        event.alt_key(),
        event.ctrl_key(),
        event.meta_key(),
        event.shift_key(),
    )
}

fn mouse_modifiers(event: &web_sys::MouseEvent) -> ModifierKeys {
    ModifierKeys::from_readouts(
        event.alt_key(),
        event.ctrl_key(),
        event.meta_key(),
        event.shift_key(),
    )
}

impl ModifierState for web_sys::KeyboardEvent {
    fn modifier_keys(&self) -> ModifierKeys {
        keyboard_modifiers(self)
    }
}

impl HarkKeyboardEvent for web_sys::KeyboardEvent {
    fn key(&self) -> Cow<'_, str> {
        Cow::Owned(web_sys::KeyboardEvent::key(self))
    }
}

macro_rules! impl_mouse_event {
    ($($ty:ty),+ $(,)?) => {$(
        impl ModifierState for $ty {
            fn modifier_keys(&self) -> ModifierKeys {
                mouse_modifiers(self.as_ref())
            }
        }

        impl HarkMouseEvent for $ty {
            fn button(&self) -> i16 {
                let mouse: &web_sys::MouseEvent = self.as_ref();
                web_sys::MouseEvent::button(mouse)
            }
        }
    )+};
}

impl_mouse_event!(web_sys::MouseEvent, web_sys::PointerEvent, web_sys::WheelEvent);

// The untyped event answers keyboard and mouse readouts through dynamic casts,
// so one listener map can mix event kinds. Non-matching kinds read as no key,
// no button and no modifiers.
impl ModifierState for web_sys::Event {
    fn modifier_keys(&self) -> ModifierKeys {
        if let Some(keyboard) = self.dyn_ref::<web_sys::KeyboardEvent>() {
            keyboard_modifiers(keyboard)
        } else if let Some(mouse) = self.dyn_ref::<web_sys::MouseEvent>() {
            mouse_modifiers(mouse)
        } else {
            ModifierKeys::empty()
        }
    }
}

impl HarkKeyboardEvent for web_sys::Event {
    fn key(&self) -> Cow<'_, str> {
        self.dyn_ref::<web_sys::KeyboardEvent>()
            .map(|keyboard| Cow::Owned(keyboard.key()))
            .unwrap_or(Cow::Borrowed(""))
    }
}

impl HarkMouseEvent for web_sys::Event {
    fn button(&self) -> i16 {
        self.dyn_ref::<web_sys::MouseEvent>()
            .map(|mouse| mouse.button())
            .unwrap_or(-1)
    }
}

/// A DOM node whose listeners receive events of type `E`.
///
/// `E` defaults to the untyped [`web_sys::Event`]; pick a concrete type such
/// as [`web_sys::KeyboardEvent`] when every listener on the map shares it.
pub struct WebTarget<E = web_sys::Event> {
    target: web_sys::EventTarget,
    _event: PhantomData<fn(&E)>,
}

impl<E> WebTarget<E> {
    /// Wraps any node (element, document, window).
    pub fn new(target: &impl AsRef<web_sys::EventTarget>) -> Self {
        Self {
            target: target.as_ref().clone(),
            _event: PhantomData,
        }
    }

    /// The underlying node.
    pub fn target(&self) -> &web_sys::EventTarget {
        &self.target
    }
}

impl<E> Clone for WebTarget<E> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            _event: PhantomData,
        }
    }
}

impl<E> fmt::Debug for WebTarget<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebTarget")
            .field("target", &self.target)
            .finish()
    }
}

/// A registered native listener.
///
/// Owns the JS closure; dropping it while still registered invalidates the
/// callback, so keep it until the listener is removed.
pub struct WebListener {
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl WebListener {
    fn function(&self) -> &js_sys::Function {
        self.closure.as_ref().unchecked_ref()
    }
}

impl fmt::Debug for WebListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebListener").finish_non_exhaustive()
    }
}

impl<E> HarkEventTarget for WebTarget<E>
where
    E: JsCast + 'static,
{
    type Event = E;
    type Registration = WebListener;

    fn add_listener(
        &self,
        event_type: &str,
        handler: BoxHandler<E>,
        options: ListenerOptions,
    ) -> Result<WebListener, HarkError> {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            handler.handle(event.unchecked_ref::<E>());
        }) as Box<dyn FnMut(web_sys::Event)>);

        let native = AddEventListenerOptions::new();
        if let Some(passive) = options.passive {
            native.set_passive(passive);
        }
        if let Some(capture) = options.capture {
            native.set_capture(capture);
        }
        if let Some(once) = options.once {
            native.set_once(once);
        }

        self.target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_type,
                closure.as_ref().unchecked_ref(),
                &native,
            )
            .map_err(|err| HarkError::registration(event_type, format!("{err:?}")))?;

        Ok(WebListener { closure })
    }

    fn remove_listener(&self, event_type: &str, registration: &WebListener, options: ListenerOptions) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            event_type,
            registration.function(),
            options.capture(),
        );
    }
}
