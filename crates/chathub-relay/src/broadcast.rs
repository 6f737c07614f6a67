//! Presence broadcaster — fans join/leave events out to session queues.

use std::sync::Arc;

use tracing::debug;

use chathub_entity::presence::PresenceEvent;

use crate::session::handle::SessionHandle;

/// Builds presence events and enqueues them onto session presence
/// queues. Invoked by the registry while it holds the session map lock,
/// so a broadcast is atomic with the registration or removal it
/// announces.
#[derive(Debug, Default)]
pub struct PresenceBroadcaster;

impl PresenceBroadcaster {
    /// Create a broadcaster.
    pub fn new() -> Self {
        Self
    }

    /// Announce that `subject` joined, to every *other* active session.
    ///
    /// The subject never hears about its own arrival.
    pub fn announce_join<'a>(
        &self,
        subject: &SessionHandle,
        sessions: impl Iterator<Item = &'a Arc<SessionHandle>>,
    ) {
        let event = PresenceEvent::joined(&subject.identity());
        let mut notified = 0usize;

        for peer in sessions {
            if peer.token == subject.token {
                continue;
            }
            if peer.enqueue_presence(event.clone()) {
                notified += 1;
            }
        }

        debug!(
            subject = %subject.token,
            display_name = %subject.display_name,
            notified,
            "join announced"
        );
    }

    /// Announce that `subject` left, to every active session *including
    /// the subject itself*.
    ///
    /// The self-delivered Left event is the signal that terminates the
    /// subject's own update multiplexer.
    pub fn announce_leave<'a>(
        &self,
        subject: &SessionHandle,
        sessions: impl Iterator<Item = &'a Arc<SessionHandle>>,
    ) {
        let event = PresenceEvent::left(&subject.identity());
        let mut notified = 0usize;

        for peer in sessions {
            if peer.enqueue_presence(event.clone()) {
                notified += 1;
            }
        }

        debug!(
            subject = %subject.token,
            display_name = %subject.display_name,
            notified,
            "leave announced"
        );
    }
}
