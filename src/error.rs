// src/error.rs

use thiserror::Error;

/// Failure reported by the transport collaborator. The core never produces
/// one itself; it only carries them upward from `poll`/`collect`.
#[derive(Debug, Clone, Error)]
#[error("transport: {message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// The only two ways a poll can actually fail. Missing fields, junk HTML
/// and malformed rows are data ("n/a"), not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The router could not be fetched. Retry policy is the caller's call.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// No spec for the requested model and no generic fallback registered.
    /// A packaging defect, not a runtime condition; do not retry.
    #[error("no spec registered for model '{model}' and no 'Generic' fallback")]
    NoSpec { model: String },
}
