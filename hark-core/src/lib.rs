//! # hark-core
//!
//! Core traits for Hark, a small toolkit for attaching DOM event listeners
//! with declarative modifiers.
//!
//! This crate has minimal dependencies and holds everything that operates on a
//! single handler. The registration facade and the handler composer live in
//! `hark-std`.
//!
//! # Building Blocks
//!
//! ## Host model ([`DomEvent`], [`EventTarget`])
//!
//! The browser is an external collaborator. Events and native listener
//! registration are reached through traits, implemented for `web-sys` behind
//! the `web` feature and in memory by `hark_std::testing`.
//!
//! ## Handlers ([`Handler`])
//!
//! An opaque callable taking `&Event`. Closures qualify through a blanket impl.
//!
//! ## Decorators
//!
//! One guard or one side effect each: [`PreventDefault`], [`StopPropagation`],
//! [`StopImmediatePropagation`], [`SelfOnly`], [`Trusted`], [`Once`], [`Key`]
//! and [`Button`]. Available as free functions and as [`Handler`] methods.
//!
//! ## Pipeline ([`with_modifiers`])
//!
//! Folds the decorators selected by a [`Modifiers`] flag set over a handler in
//! one fixed order.
//!
//! # Error Types
//!
//! - [`HarkError`] - registration and modifier-syntax errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod decorators;
mod error;
mod event;
mod handler;
mod keys;
mod modifiers;
mod target;

#[cfg(test)]
mod test_support;

#[cfg(feature = "web")]
pub mod web;

// Re-exports
pub use decorators::{
    Once, PreventDefault, SelfOnly, StopImmediatePropagation, StopPropagation, Trusted, once,
    prevent_default, self_only, stop_immediate_propagation, stop_propagation, trusted,
};
pub use error::HarkError;
pub use event::{DomEvent, KeyboardEvent, ModifierKeys, ModifierState, MouseButton, MouseEvent};
pub use handler::{BoxHandler, Handler, Noop};
pub use keys::{Button, Key, ModifierMatch, key, left, middle, right};
pub use modifiers::{ListenerOptions, Modifiers, with_modifiers};
pub use target::EventTarget;
