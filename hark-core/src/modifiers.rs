//! # Modifier Flags and Pipeline
//!
//! [`Modifiers`] is the declarative flag set a listener is configured with.
//! Six of the flags are *wrappable*: [`with_modifiers`] turns them into
//! decorators around a handler. The remaining two, `PASSIVE` and `CAPTURE`,
//! are native registration options only and never enter the pipeline; they
//! travel to the host through [`ListenerOptions`].
//!
//! # Order
//!
//! Flags are applied in their declaration order, earlier flags outer-most:
//!
//! ```text
//! PREVENT_DEFAULT( STOP_PROPAGATION( STOP_IMMEDIATE_PROPAGATION( SELF( TRUSTED( ONCE( handler ))))))
//! ```
//!
//! so the side effects run first, then the `SELF`/`TRUSTED` guards, then the
//! `ONCE` gate. Registration through `hark_std::attach` uses the same pipeline.

use crate::{
    decorators::{Once, PreventDefault, SelfOnly, StopImmediatePropagation, StopPropagation, Trusted},
    error::HarkError,
    event::DomEvent,
    handler::{BoxHandler, Handler},
};
use bitflags::bitflags;
use std::str::FromStr;

bitflags! {
    /// Declarative listener modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Cancel the event's default action.
        const PREVENT_DEFAULT = 1 << 0;
        /// Stop the event reaching further nodes.
        const STOP_PROPAGATION = 1 << 1;
        /// Also stop the remaining listeners on this node.
        const STOP_IMMEDIATE_PROPAGATION = 1 << 2;
        /// Promise the host never to cancel the default action (native option).
        const PASSIVE = 1 << 3;
        /// Listen in the capture phase (native option).
        const CAPTURE = 1 << 4;
        /// Run at most once.
        const ONCE = 1 << 5;
        /// Only when `target == currentTarget`.
        const SELF = 1 << 6;
        /// Only for user-agent dispatched events.
        const TRUSTED = 1 << 7;
    }
}

impl Modifiers {
    /// The flags [`with_modifiers`] turns into decorators.
    pub const WRAPPABLE: Self = Self::PREVENT_DEFAULT
        .union(Self::STOP_PROPAGATION)
        .union(Self::STOP_IMMEDIATE_PROPAGATION)
        .union(Self::SELF)
        .union(Self::TRUSTED)
        .union(Self::ONCE);

    /// The wrappable flags, outer-most first.
    pub const PIPELINE_ORDER: [Self; 6] = [
        Self::PREVENT_DEFAULT,
        Self::STOP_PROPAGATION,
        Self::STOP_IMMEDIATE_PROPAGATION,
        Self::SELF,
        Self::TRUSTED,
        Self::ONCE,
    ];

    /// The subset of `self` that [`with_modifiers`] acts on.
    pub const fn wrappable(self) -> Self {
        self.intersection(Self::WRAPPABLE)
    }

    /// The native registration options these modifiers imply.
    pub fn listener_options(self) -> ListenerOptions {
        ListenerOptions::from(self)
    }

    /// The name used in `a|b|c` modifier syntax for a single flag.
    pub fn syntax_name(self) -> Option<&'static str> {
        MODIFIER_NAMES
            .iter()
            .find(|(_, flag)| *flag == self)
            .map(|(name, _)| *name)
    }
}

const MODIFIER_NAMES: [(&str, Modifiers); 8] = [
    ("preventDefault", Modifiers::PREVENT_DEFAULT),
    ("stopPropagation", Modifiers::STOP_PROPAGATION),
    ("stopImmediatePropagation", Modifiers::STOP_IMMEDIATE_PROPAGATION),
    ("passive", Modifiers::PASSIVE),
    ("capture", Modifiers::CAPTURE),
    ("once", Modifiers::ONCE),
    ("self", Modifiers::SELF),
    ("trusted", Modifiers::TRUSTED),
];

/// Parses the `|`-separated modifier syntax of markup frameworks,
/// e.g. `"preventDefault|self|once"`. Surrounding whitespace and empty
/// segments are ignored.
impl FromStr for Modifiers {
    type Err = HarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split('|')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .try_fold(Modifiers::empty(), |acc, name| {
                MODIFIER_NAMES
                    .iter()
                    .find(|(known, _)| *known == name)
                    .map(|(_, flag)| acc | *flag)
                    .ok_or_else(|| HarkError::UnknownModifier(name.to_string()))
            })
    }
}

/// Options handed to the host's native listener registration.
///
/// `None` means "use the platform default", which is not always `false`
/// (some hosts default `passive` to `true` for touch and wheel listeners on
/// the document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ListenerOptions {
    /// The listener never cancels the default action.
    pub passive: Option<bool>,
    /// The listener runs in the capture phase.
    pub capture: Option<bool>,
    /// The host removes the listener after its first invocation.
    pub once: Option<bool>,
}

impl ListenerOptions {
    /// The effective capture flag, which is also what listener removal matches on.
    pub fn capture(&self) -> bool {
        self.capture.unwrap_or(false)
    }

    /// The effective passive flag.
    pub fn passive(&self) -> bool {
        self.passive.unwrap_or(false)
    }

    /// The effective once flag.
    pub fn once(&self) -> bool {
        self.once.unwrap_or(false)
    }
}

impl From<Modifiers> for ListenerOptions {
    fn from(modifiers: Modifiers) -> Self {
        let flag = |flag| modifiers.contains(flag).then_some(true);
        Self {
            passive: flag(Modifiers::PASSIVE),
            capture: flag(Modifiers::CAPTURE),
            once: flag(Modifiers::ONCE),
        }
    }
}

/// Wraps `handler` with the decorator of every wrappable flag in `modifiers`.
///
/// `PASSIVE` and `CAPTURE` are ignored. With no wrappable flag set the
/// handler is returned as is, only boxed.
pub fn with_modifiers<E, H>(handler: H, modifiers: Modifiers) -> BoxHandler<E>
where
    E: DomEvent + 'static,
    H: Handler<E>,
{
    let enabled = modifiers.wrappable();
    let mut handler = handler.boxed();

    // Innermost first, so the first flag in order ends up outer-most.
    for flag in Modifiers::PIPELINE_ORDER.into_iter().rev() {
        if !enabled.contains(flag) {
            continue;
        }
        handler = if flag == Modifiers::PREVENT_DEFAULT {
            BoxHandler::new(PreventDefault::new(handler))
        } else if flag == Modifiers::STOP_PROPAGATION {
            BoxHandler::new(StopPropagation::new(handler))
        } else if flag == Modifiers::STOP_IMMEDIATE_PROPAGATION {
            BoxHandler::new(StopImmediatePropagation::new(handler))
        } else if flag == Modifiers::SELF {
            BoxHandler::new(SelfOnly::new(handler))
        } else if flag == Modifiers::TRUSTED {
            BoxHandler::new(Trusted::new(handler))
        } else {
            BoxHandler::new(Once::new(handler))
        };
    }

    handler
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestEvent, counter};

    fn logging_handler(event: &TestEvent) {
        event.log("handler");
    }

    #[test]
    fn test_no_flags_is_identity() {
        let (count, handler) = counter();
        let wrapped = with_modifiers(handler, Modifiers::empty());
        let event = TestEvent::default().bubbled().untrusted();

        wrapped.handle(&event);
        wrapped.handle(&event);

        assert_eq!(count.get(), 2);
        assert!(event.entries().is_empty());
    }

    #[test]
    fn test_native_only_flags_are_not_wrapped() {
        let (count, handler) = counter();
        let wrapped = with_modifiers(handler, Modifiers::PASSIVE | Modifiers::CAPTURE);
        let event = TestEvent::default();

        wrapped.handle(&event);
        wrapped.handle(&event);

        assert_eq!(count.get(), 2);
        assert_eq!(event.prevented.get(), 0);
    }

    #[test]
    fn test_side_effects_run_in_declaration_order() {
        let wrapped = with_modifiers(
            logging_handler,
            Modifiers::STOP_IMMEDIATE_PROPAGATION
                | Modifiers::PREVENT_DEFAULT
                | Modifiers::STOP_PROPAGATION,
        );
        let event = TestEvent::default();

        wrapped.handle(&event);

        assert_eq!(
            event.entries(),
            vec![
                "preventDefault",
                "stopPropagation",
                "stopImmediatePropagation",
                "handler"
            ]
        );
    }

    #[test]
    fn test_prevent_default_once_before_handler_for_every_combination() {
        for bits in 0..=Modifiers::all().bits() {
            let modifiers = Modifiers::from_bits_truncate(bits) | Modifiers::PREVENT_DEFAULT;
            let wrapped = with_modifiers(logging_handler, modifiers);
            let event = TestEvent::default();

            wrapped.handle(&event);

            let entries = event.entries();
            assert_eq!(event.prevented.get(), 1, "{modifiers:?}");
            assert_eq!(entries.first(), Some(&"preventDefault"), "{modifiers:?}");
            assert_eq!(entries.last(), Some(&"handler"), "{modifiers:?}");
        }
    }

    #[test]
    fn test_side_effects_precede_guards() {
        let (count, handler) = counter();
        let wrapped = with_modifiers(handler, Modifiers::PREVENT_DEFAULT | Modifiers::SELF);
        let event = TestEvent::default().bubbled();

        wrapped.handle(&event);

        assert_eq!(event.prevented.get(), 1);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_once_gate_is_innermost() {
        let (count, handler) = counter();
        let wrapped = with_modifiers(handler, Modifiers::ONCE | Modifiers::TRUSTED);

        // A declined guard does not consume the once gate.
        wrapped.handle(&TestEvent::default().untrusted());
        assert_eq!(count.get(), 0);

        wrapped.handle(&TestEvent::default());
        wrapped.handle(&TestEvent::default());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_method_form_matches_function_form() {
        let (count, handler) = counter();
        let wrapped = handler.with_modifiers(Modifiers::SELF);

        wrapped.handle(&TestEvent::default().bubbled());
        wrapped.handle(&TestEvent::default());

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_parse_modifier_syntax() {
        let parsed: Modifiers = "preventDefault | self|once".parse().unwrap();
        assert_eq!(
            parsed,
            Modifiers::PREVENT_DEFAULT | Modifiers::SELF | Modifiers::ONCE
        );

        assert_eq!("".parse::<Modifiers>().unwrap(), Modifiers::empty());
        assert_eq!(
            "capture|bogus".parse::<Modifiers>(),
            Err(HarkError::UnknownModifier("bogus".to_string()))
        );
    }

    #[test]
    fn test_syntax_names_round_trip_every_flag() {
        for flag in Modifiers::all().iter() {
            let name = flag.syntax_name().unwrap();
            assert_eq!(name.parse::<Modifiers>().unwrap(), flag);
        }
        assert_eq!(Modifiers::WRAPPABLE.syntax_name(), None);
    }

    #[test]
    fn test_listener_options_leave_unset_flags_to_platform() {
        let options = (Modifiers::CAPTURE | Modifiers::PREVENT_DEFAULT).listener_options();
        assert_eq!(
            options,
            ListenerOptions {
                passive: None,
                capture: Some(true),
                once: None,
            }
        );
        assert!(options.capture());
        assert!(!options.passive());
        assert!(!options.once());
    }

    #[test]
    fn test_wrappable_excludes_native_options() {
        assert!(!Modifiers::WRAPPABLE.contains(Modifiers::PASSIVE));
        assert!(!Modifiers::WRAPPABLE.contains(Modifiers::CAPTURE));
        assert_eq!(Modifiers::all().wrappable(), Modifiers::WRAPPABLE);
        assert_eq!(
            Modifiers::PIPELINE_ORDER
                .into_iter()
                .fold(Modifiers::empty(), |acc, flag| acc | flag),
            Modifiers::WRAPPABLE
        );
    }
}
