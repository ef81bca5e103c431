//! # hark-std
//!
//! Standard implementations for Hark.
//!
//! This crate provides:
//! - **Composition**: [`Compose`], [`compose()`], [`compose!`]
//! - **Registration**: [`attach`], [`EventMap`], [`EventParams`], [`Listeners`], [`events!`]
//! - **Logging**: [`Logged`]
//! - **Testing**: [`testing::MemoryTarget`], [`testing::MockEvent`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use hark_core;

mod compose;
pub mod listeners;
pub mod logging;
pub mod testing;

pub use compose::{Compose, compose};
pub use listeners::{EventMap, EventParams, Listeners, Resolved, attach};
pub use logging::{Logged, logged};

/// Composes handlers of any types into one [`Compose`].
///
/// ```rust,ignore
/// let handler = compose![
///     |event: &MockEvent| log(event),
///     CountingHandler::new(),
/// ];
/// ```
#[macro_export]
macro_rules! compose {
    ($($handler:expr),* $(,)?) => {
        $crate::Compose::from_handlers(::std::vec![
            $($crate::hark_core::BoxHandler::new($handler)),*
        ])
    };
}

/// Builds an [`EventMap`] from `"event type" => params` pairs.
///
/// ```rust,ignore
/// let map = events! {
///     "click" => EventParams::func(on_click),
///     "wheel" => EventParams::modifiers(Modifiers::PASSIVE),
/// };
/// ```
#[macro_export]
macro_rules! events {
    ($($event_type:expr => $params:expr),* $(,)?) => {{
        let map = $crate::EventMap::new();
        $(let map = map.on($event_type, $params);)*
        map
    }};
}
