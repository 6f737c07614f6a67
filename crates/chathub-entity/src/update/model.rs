//! The tagged item delivered on a session's outbound stream.

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::presence::PresenceEvent;

/// One item on a session's outbound update stream: either a direct
/// message addressed to the session, or a presence change about some
/// session. Serialized with an internal `type` tag so clients can
/// dispatch without peeking at field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Update {
    /// An inbound direct message.
    Message(Message),
    /// A presence change (join/leave) for some session.
    Presence(PresenceEvent),
}

impl Update {
    /// Return the inner message, if this update is one.
    pub fn as_message(&self) -> Option<&Message> {
        match self {
            Self::Message(message) => Some(message),
            Self::Presence(_) => None,
        }
    }

    /// Return the inner presence event, if this update is one.
    pub fn as_presence(&self) -> Option<&PresenceEvent> {
        match self {
            Self::Message(_) => None,
            Self::Presence(event) => Some(event),
        }
    }
}
