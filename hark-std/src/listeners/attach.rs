//! The registration facade.

use super::params::{EventMap, Resolved};
use hark_core::{DomEvent, EventTarget, HarkError, ListenerOptions, with_modifiers};
use std::{borrow::Cow, fmt, mem};

struct Registered<R> {
    event_type: Cow<'static, str>,
    options: ListenerOptions,
    registration: R,
}

/// Every native listener one [`attach`] call registered.
///
/// [`Listeners::detach`] removes them all. Dropping the value detaches as
/// well; call [`Listeners::forget`] to keep the listeners for the life of
/// the page instead.
#[must_use = "dropping `Listeners` detaches every listener; call `forget` to keep them"]
pub struct Listeners<T: EventTarget> {
    target: T,
    registered: Vec<Registered<T::Registration>>,
}

impl<T: EventTarget> Listeners<T> {
    fn new(target: T) -> Self {
        Self {
            target,
            registered: Vec::new(),
        }
    }

    /// The node the listeners are registered on.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Number of native listeners still tracked.
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Whether nothing is tracked, either because nothing was registered or
    /// because [`Listeners::detach`] already ran.
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// The event type of every tracked listener, in registration order.
    pub fn event_types(&self) -> impl Iterator<Item = &str> {
        self.registered
            .iter()
            .map(|registered| registered.event_type.as_ref())
    }

    /// Removes every tracked listener.
    ///
    /// Calling it again does nothing. Listeners the host already dropped on
    /// its own (a fired `once` listener) are removed without error.
    pub fn detach(&mut self) {
        if self.registered.is_empty() {
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(listeners = self.registered.len(), "detaching listeners");

        for registered in self.registered.drain(..) {
            self.target.remove_listener(
                &registered.event_type,
                &registered.registration,
                registered.options,
            );
        }
    }

    /// Stops tracking the listeners without removing them.
    pub fn forget(mut self) {
        let registered = mem::take(&mut self.registered);
        mem::forget(registered);
    }
}

impl<T: EventTarget> Drop for Listeners<T> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<T: EventTarget + fmt::Debug> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("target", &self.target)
            .field("event_types", &self.event_types().collect::<Vec<_>>())
            .finish()
    }
}

/// Registers the listeners described by `events` on `target`.
///
/// For every event type, each resolved handler is wrapped with the
/// wrappable modifiers (see [`with_modifiers`]) and registered as its own
/// native listener with the `passive`, `capture` and `once` options the
/// modifiers imply.
///
/// # Errors
///
/// Returns the host's [`HarkError::Registration`] if any registration fails.
/// Listeners registered earlier in the same call are removed again.
pub fn attach<T>(target: &T, events: EventMap<T::Event>) -> Result<Listeners<T>, HarkError>
where
    T: EventTarget + Clone,
    T::Event: DomEvent,
{
    let mut listeners = Listeners::new(target.clone());

    for (event_type, params) in events {
        let Resolved {
            handlers,
            modifiers,
        } = params.resolve();
        let options = modifiers.listener_options();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            event_type = %event_type,
            handlers = handlers.len(),
            ?modifiers,
            ?options,
            "attaching listeners"
        );

        for handler in handlers {
            let wrapped = with_modifiers(handler, modifiers);
            let registration = match target.add_listener(&event_type, wrapped, options) {
                Ok(registration) => registration,
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        %err,
                        registered = listeners.len(),
                        "listener registration failed, rolling back"
                    );
                    return Err(err);
                }
            };
            listeners.registered.push(Registered {
                event_type: event_type.clone(),
                options,
                registration,
            });
        }
    }

    Ok(listeners)
}
