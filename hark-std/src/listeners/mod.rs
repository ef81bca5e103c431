//! Listener registration: a declarative [`EventMap`] in, a [`Listeners`] disposer out.
//!
//! ```rust,ignore
//! use hark_std::{attach, events, listeners::EventParams};
//! use hark_core::Modifiers;
//!
//! let mut listeners = attach(&target, events! {
//!     "click" => EventParams::func(on_click),
//!     "submit" => EventParams::handler(on_submit).with_modifiers(Modifiers::PREVENT_DEFAULT),
//!     "wheel" => EventParams::modifiers(Modifiers::PASSIVE),
//! })?;
//!
//! listeners.detach();
//! ```

pub mod attach;
pub mod params;

pub use attach::{Listeners, attach};
pub use params::{EventMap, EventParams, Resolved};
