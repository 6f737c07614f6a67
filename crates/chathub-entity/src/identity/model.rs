//! Public identity value object.

use serde::{Deserialize, Serialize};

use chathub_core::types::SessionToken;

/// The public view of one registered session, as returned by Register
/// and List. The token doubles as the caller's credential for every
/// subsequent call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque identity token, unique for the session's life.
    pub token: SessionToken,
    /// Display name, unique among currently active sessions.
    pub display_name: String,
}

impl Identity {
    /// Create an identity view.
    pub fn new(token: SessionToken, display_name: impl Into<String>) -> Self {
        Self {
            token,
            display_name: display_name.into(),
        }
    }
}
