//! # Registration Seam
//!
//! [`EventTarget`] is the host's native `addEventListener` /
//! `removeEventListener` pair. Hark builds the final handler; the target only
//! stores it and calls it during dispatch.

use crate::{error::HarkError, handler::BoxHandler, modifiers::ListenerOptions};

/// A node that native listeners can be registered on.
pub trait EventTarget {
    /// The event type handlers registered here receive.
    type Event: 'static;

    /// Whatever the host needs to remove the listener again.
    type Registration;

    /// Registers `handler` for `event_type`.
    fn add_listener(
        &self,
        event_type: &str,
        handler: BoxHandler<Self::Event>,
        options: ListenerOptions,
    ) -> Result<Self::Registration, HarkError>;

    /// Removes a listener previously returned by [`EventTarget::add_listener`].
    ///
    /// The host matches on the event type, the registration and the capture
    /// flag. Removing a listener that is already gone (for example a `once`
    /// listener that has fired) is a no-op.
    fn remove_listener(
        &self,
        event_type: &str,
        registration: &Self::Registration,
        options: ListenerOptions,
    );
}
