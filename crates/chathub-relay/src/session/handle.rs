//! Individual session handle.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::warn;

use chathub_core::config::relay::RelayConfig;
use chathub_core::types::SessionToken;
use chathub_entity::identity::Identity;
use chathub_entity::message::Message;
use chathub_entity::presence::PresenceEvent;

/// A handle to one registered session.
///
/// Holds the bounded producer sides of the session's two inbound queues,
/// plus metadata about the registered client. The matching receivers sit
/// in a take-once slot claimed by the session's update multiplexer; the
/// handle itself is owned by the registry and shared with producers via
/// `Arc`.
#[derive(Debug)]
pub struct SessionHandle {
    /// Identity token, allocated at registration.
    pub token: SessionToken,
    /// Display name, unique among active sessions.
    pub display_name: String,
    /// When the session registered.
    pub connected_at: DateTime<Utc>,
    /// Producer side of the direct-message queue.
    message_tx: mpsc::Sender<Message>,
    /// Producer side of the presence-event queue.
    presence_tx: mpsc::Sender<PresenceEvent>,
    /// Consumer sides, held until the update stream is opened.
    queues: Mutex<Option<SessionQueues>>,
}

/// The consumer sides of a session's two inbound queues. Exactly one
/// multiplexer may hold these at a time.
#[derive(Debug)]
pub struct SessionQueues {
    /// Receiver for routed direct messages.
    pub messages: mpsc::Receiver<Message>,
    /// Receiver for broadcast presence events.
    pub presence: mpsc::Receiver<PresenceEvent>,
}

impl SessionHandle {
    /// Create a session handle with freshly allocated token and queues.
    pub fn new(display_name: impl Into<String>, config: &RelayConfig) -> Self {
        let (message_tx, message_rx) = mpsc::channel(config.message_queue_capacity);
        let (presence_tx, presence_rx) = mpsc::channel(config.presence_queue_capacity);

        Self {
            token: SessionToken::new(),
            display_name: display_name.into(),
            connected_at: Utc::now(),
            message_tx,
            presence_tx,
            queues: Mutex::new(Some(SessionQueues {
                messages: message_rx,
                presence: presence_rx,
            })),
        }
    }

    /// The session's public identity.
    pub fn identity(&self) -> Identity {
        Identity::new(self.token, self.display_name.clone())
    }

    /// Enqueue a direct message for this session.
    ///
    /// Delivery is best-effort: a full queue drops the message with a
    /// warning rather than blocking the producer.
    pub fn enqueue_message(&self, message: Message) -> bool {
        match self.message_tx.try_send(message) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(
                    token = %self.token,
                    display_name = %self.display_name,
                    "message queue full, dropping direct message"
                );
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        }
    }

    /// Enqueue a presence event for this session. Same drop-on-full
    /// policy as [`enqueue_message`](Self::enqueue_message).
    pub fn enqueue_presence(&self, event: PresenceEvent) -> bool {
        match self.presence_tx.try_send(event) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(
                    token = %self.token,
                    display_name = %self.display_name,
                    "presence queue full, dropping presence event"
                );
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => false,
        }
    }

    /// Claim the consumer sides of both queues.
    ///
    /// Returns `None` if a multiplexer already took them; the queues have
    /// exactly one consumer for the session's whole life.
    pub fn take_queues(&self) -> Option<SessionQueues> {
        self.queues
            .lock()
            .expect("session queue slot poisoned")
            .take()
    }
}
