//! Presence domain entities.

pub mod model;

pub use model::PresenceEvent;

use serde::{Deserialize, Serialize};

/// The kind of presence change a session underwent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceKind {
    /// The subject registered and came online.
    Joined,
    /// The subject deregistered and went offline.
    Left,
}

impl PresenceKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Joined => "joined",
            Self::Left => "left",
        }
    }
}

impl std::fmt::Display for PresenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
