//! Error types for Hark.
//!
//! Handlers themselves never produce errors through this layer: a panic in a
//! caller-supplied handler unwinds straight to the native dispatcher. The only
//! failures modelled here come from the host registration primitive and from
//! parsing modifier syntax.

use thiserror::Error;

/// Top-level error type for all Hark operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarkError {
    /// The host refused to register a listener.
    #[error("failed to register `{event_type}` listener: {reason}")]
    Registration {
        /// The event type that was being registered.
        event_type: String,
        /// Host-provided description of the failure.
        reason: String,
    },

    /// A modifier name in `a|b|c` syntax was not recognized.
    #[error("unknown modifier: {0}")]
    UnknownModifier(String),
}

impl HarkError {
    /// Builds a [`HarkError::Registration`].
    pub fn registration(event_type: impl Into<String>, reason: impl Into<String>) -> Self {
        HarkError::Registration {
            event_type: event_type.into(),
            reason: reason.into(),
        }
    }
}
