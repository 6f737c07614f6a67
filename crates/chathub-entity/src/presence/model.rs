//! Presence event value object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chathub_core::types::SessionToken;

use super::PresenceKind;

use crate::identity::Identity;

/// Notification that one session joined or left. Immutable; every
/// recipient of the same broadcast sees an identical event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceEvent {
    /// Token of the session the event is about.
    pub subject: SessionToken,
    /// Display name of that session.
    pub display_name: String,
    /// Whether the subject joined or left.
    pub kind: PresenceKind,
    /// Server-assigned event timestamp.
    pub occurred_at: DateTime<Utc>,
}

impl PresenceEvent {
    /// Build a Joined event about the given identity.
    pub fn joined(subject: &Identity) -> Self {
        Self {
            subject: subject.token,
            display_name: subject.display_name.clone(),
            kind: PresenceKind::Joined,
            occurred_at: Utc::now(),
        }
    }

    /// Build a Left event about the given identity.
    pub fn left(subject: &Identity) -> Self {
        Self {
            subject: subject.token,
            display_name: subject.display_name.clone(),
            kind: PresenceKind::Left,
            occurred_at: Utc::now(),
        }
    }

    /// Whether this is a Left event about the given session.
    pub fn is_departure_of(&self, token: SessionToken) -> bool {
        self.kind == PresenceKind::Left && self.subject == token
    }
}
