//! Declarative per-event listener configuration.

use hark_core::{BoxHandler, Handler, Modifiers, Noop};
use std::{borrow::Cow, fmt};

/// What to register for one event type.
///
/// One variant per accepted shape, so a configuration can never carry both a
/// single handler and a handler list.
pub enum EventParams<E> {
    /// A bare handler, registered without modifiers.
    Func(BoxHandler<E>),
    /// One handler with modifiers.
    Handler {
        /// The handler.
        handler: BoxHandler<E>,
        /// Modifiers applied to it.
        modifiers: Modifiers,
    },
    /// Several handlers, each registered as its own listener with the same modifiers.
    Handlers {
        /// The handlers, in registration order.
        handlers: Vec<BoxHandler<E>>,
        /// Modifiers applied to each of them.
        modifiers: Modifiers,
    },
    /// No handler at all: a no-op listener carrying only native options such
    /// as `PASSIVE` or `CAPTURE`.
    Modifiers(Modifiers),
}

/// The handlers and modifiers an [`EventParams`] resolves to.
pub struct Resolved<E> {
    /// Raw handlers, one native listener each.
    pub handlers: Vec<BoxHandler<E>>,
    /// Modifiers shared by all of them.
    pub modifiers: Modifiers,
}

impl<E: 'static> EventParams<E> {
    /// A bare handler.
    pub fn func<H: Handler<E>>(handler: H) -> Self {
        EventParams::Func(handler.boxed())
    }

    /// A single handler, to be given modifiers with [`EventParams::with_modifiers`].
    pub fn handler<H: Handler<E>>(handler: H) -> Self {
        EventParams::Handler {
            handler: handler.boxed(),
            modifiers: Modifiers::empty(),
        }
    }

    /// A list of handlers of one type.
    pub fn handlers<I>(handlers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Handler<E>,
    {
        EventParams::Handlers {
            handlers: handlers.into_iter().map(BoxHandler::new).collect(),
            modifiers: Modifiers::empty(),
        }
    }

    /// Modifiers only.
    pub fn modifiers(modifiers: Modifiers) -> Self {
        EventParams::Modifiers(modifiers)
    }

    /// Sets the modifiers. A bare handler becomes a single handler with modifiers.
    pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
        match self {
            EventParams::Func(handler) | EventParams::Handler { handler, .. } => {
                EventParams::Handler { handler, modifiers }
            }
            EventParams::Handlers { handlers, .. } => EventParams::Handlers { handlers, modifiers },
            EventParams::Modifiers(_) => EventParams::Modifiers(modifiers),
        }
    }

    /// Extracts the handlers and modifiers to register.
    ///
    /// Precedence follows the variant order: a bare handler registers alone
    /// with no modifiers; a single handler registers with its modifiers; a
    /// handler list registers every entry (an empty list registers nothing);
    /// modifiers alone register one no-op listener.
    pub fn resolve(self) -> Resolved<E> {
        match self {
            EventParams::Func(handler) => Resolved {
                handlers: vec![handler],
                modifiers: Modifiers::empty(),
            },
            EventParams::Handler { handler, modifiers } => Resolved {
                handlers: vec![handler],
                modifiers,
            },
            EventParams::Handlers {
                handlers,
                modifiers,
            } => Resolved {
                handlers,
                modifiers,
            },
            EventParams::Modifiers(modifiers) => Resolved {
                handlers: vec![BoxHandler::new(Noop)],
                modifiers,
            },
        }
    }
}

impl<E> fmt::Debug for EventParams<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventParams::Func(_) => f.write_str("Func"),
            EventParams::Handler { modifiers, .. } => f
                .debug_struct("Handler")
                .field("modifiers", modifiers)
                .finish_non_exhaustive(),
            EventParams::Handlers {
                handlers,
                modifiers,
            } => f
                .debug_struct("Handlers")
                .field("handlers", &handlers.len())
                .field("modifiers", modifiers)
                .finish(),
            EventParams::Modifiers(modifiers) => {
                f.debug_tuple("Modifiers").field(modifiers).finish()
            }
        }
    }
}

/// Event types mapped to their [`EventParams`], in insertion order.
pub struct EventMap<E> {
    entries: Vec<(Cow<'static, str>, EventParams<E>)>,
}

impl<E: 'static> EventMap<E> {
    /// An empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Configures `event_type`.
    ///
    /// Configuring the same event type twice replaces the earlier entry but
    /// keeps its position.
    pub fn on(mut self, event_type: impl Into<Cow<'static, str>>, params: EventParams<E>) -> Self {
        let event_type = event_type.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == event_type) {
            Some((_, slot)) => *slot = params,
            None => self.entries.push((event_type, params)),
        }
        self
    }

    /// Number of configured event types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no event type is configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured event types, in order.
    pub fn event_types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(event_type, _)| event_type.as_ref())
    }
}

impl<E: 'static> Default for EventMap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> IntoIterator for EventMap<E> {
    type Item = (Cow<'static, str>, EventParams<E>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<E> fmt::Debug for EventMap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(event_type, params)| (event_type, params)))
            .finish()
    }
}
