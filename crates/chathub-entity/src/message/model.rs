//! Point-to-point message value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chathub_core::types::SessionToken;

/// One point-to-point text message. Immutable after construction; the
/// timestamp is assigned by the server at routing time, never by the
/// client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Token of the sending session.
    pub sender: SessionToken,
    /// Token of the receiving session.
    pub receiver: SessionToken,
    /// Message body text.
    pub body: String,
    /// Server-assigned send timestamp.
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// Build a message with a server-assigned timestamp.
    pub fn new(sender: SessionToken, receiver: SessionToken, body: impl Into<String>) -> Self {
        Self {
            sender,
            receiver,
            body: body.into(),
            sent_at: Utc::now(),
        }
    }
}
