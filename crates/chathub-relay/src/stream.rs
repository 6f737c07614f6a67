//! Per-session update multiplexer.

use tracing::debug;

use chathub_core::types::SessionToken;
use chathub_entity::message::Message;
use chathub_entity::presence::PresenceEvent;
use chathub_entity::update::Update;

use crate::session::handle::SessionQueues;

/// Multiplexer lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuxState {
    /// Actively merging the session's queues onto the outbound stream.
    Streaming,
    /// The stream has ended; no further updates will be produced.
    Terminated,
}

/// Merges one session's message and presence queues into a single
/// ordered outbound stream of [`Update`]s.
///
/// There is exactly one multiplexer per open stream; it owns the
/// consumer sides of both queues and nothing else, so once the session
/// is removed from the registry and the producer handles drop, both
/// queues close and the loop ends even if the final Left event was
/// lost to backpressure.
#[derive(Debug)]
pub struct UpdateMultiplexer {
    /// Token of the session this stream belongs to.
    token: SessionToken,
    /// Consumer side of the direct-message queue.
    messages: tokio::sync::mpsc::Receiver<Message>,
    /// Consumer side of the presence-event queue.
    presence: tokio::sync::mpsc::Receiver<PresenceEvent>,
    /// Whether the message queue can still yield items.
    messages_open: bool,
    /// Whether the presence queue can still yield items.
    presence_open: bool,
    /// Lifecycle state.
    state: MuxState,
}

/// Outcome of one two-way poll.
enum Polled {
    Message(Option<Message>),
    Presence(Option<PresenceEvent>),
}

impl UpdateMultiplexer {
    /// Create a multiplexer over a session's claimed queues.
    pub fn new(token: SessionToken, queues: SessionQueues) -> Self {
        Self {
            token,
            messages: queues.messages,
            presence: queues.presence,
            messages_open: true,
            presence_open: true,
            state: MuxState::Streaming,
        }
    }

    /// The session this stream belongs to.
    pub fn token(&self) -> SessionToken {
        self.token
    }

    /// Whether the stream has ended.
    pub fn is_terminated(&self) -> bool {
        self.state == MuxState::Terminated
    }

    /// Wait for and return the next update, or `None` once the stream
    /// has ended.
    ///
    /// Waits fairly over both queues (`tokio::select!` polls branches in
    /// uniformly random order, so neither queue can starve the other).
    /// Dequeuing a Left event about this session itself delivers that
    /// final update and then terminates the stream — the deliberate
    /// shutdown signal planted by the presence broadcaster on
    /// deregistration.
    pub async fn next_update(&mut self) -> Option<Update> {
        while self.state == MuxState::Streaming {
            let polled = match (self.messages_open, self.presence_open) {
                (false, false) => {
                    debug!(token = %self.token, "both queues closed, ending update stream");
                    self.state = MuxState::Terminated;
                    return None;
                }
                (true, false) => Polled::Message(self.messages.recv().await),
                (false, true) => Polled::Presence(self.presence.recv().await),
                (true, true) => tokio::select! {
                    message = self.messages.recv() => Polled::Message(message),
                    event = self.presence.recv() => Polled::Presence(event),
                },
            };

            match polled {
                Polled::Message(Some(message)) => return Some(Update::Message(message)),
                Polled::Message(None) => self.messages_open = false,
                Polled::Presence(Some(event)) => {
                    if event.is_departure_of(self.token) {
                        debug!(
                            token = %self.token,
                            display_name = %event.display_name,
                            "own departure dequeued, stream will receive no further updates"
                        );
                        self.state = MuxState::Terminated;
                    }
                    return Some(Update::Presence(event));
                }
                Polled::Presence(None) => self.presence_open = false,
            }
        }

        None
    }
}
