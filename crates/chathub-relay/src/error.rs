//! Relay engine error types.
//!
//! `RelayError` keeps the engine's failure modes distinguishable for
//! callers and tests; it maps into the unified [`AppError`] at the
//! application boundary.

use thiserror::Error;

use chathub_core::error::AppError;
use chathub_core::types::SessionToken;

/// Errors produced by the relay engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayError {
    /// Another active session already holds the requested display name.
    #[error("display name '{0}' is already taken")]
    NameTaken(String),

    /// The display name failed the engine's basic shape checks.
    #[error("invalid display name: {0}")]
    InvalidDisplayName(String),

    /// No active session holds the given token.
    #[error("no active session for token {0}")]
    NotFound(SessionToken),

    /// The message receiver is not online.
    #[error("receiver {0} is not online")]
    ReceiverNotFound(SessionToken),

    /// The caller presented no token, a malformed token, or a token
    /// unknown to the registry.
    #[error("authentication failed: {0}")]
    Unauthenticated(String),

    /// The session's update stream has already been claimed by another
    /// consumer.
    #[error("update stream already open for session {0}")]
    StreamAlreadyOpen(SessionToken),
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        let message = err.to_string();
        match err {
            RelayError::NameTaken(_) | RelayError::StreamAlreadyOpen(_) => {
                AppError::conflict(message)
            }
            RelayError::InvalidDisplayName(_) => AppError::validation(message),
            RelayError::NotFound(_) | RelayError::ReceiverNotFound(_) => {
                AppError::not_found(message)
            }
            RelayError::Unauthenticated(_) => AppError::authentication(message),
        }
    }
}
