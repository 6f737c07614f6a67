//! Point-to-point message routing.

use std::sync::Arc;

use tracing::info;

use chathub_core::types::SessionToken;
use chathub_entity::message::Message;

use crate::error::RelayError;
use crate::session::registry::SessionRegistry;

/// Routes direct messages onto receiver queues.
#[derive(Debug, Clone)]
pub struct MessageRouter {
    /// Registry used to resolve receivers.
    registry: Arc<SessionRegistry>,
}

impl MessageRouter {
    /// Create a router backed by the given registry.
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Route one message from `sender` to `receiver`.
    ///
    /// Resolves the receiver, stamps the message with a server
    /// timestamp, and enqueues it onto the receiver's bounded message
    /// queue. The constructed message is returned to the caller for
    /// local echo; whether the receiver's stream is still being read is
    /// a transport concern, not the router's.
    pub async fn send(
        &self,
        sender: SessionToken,
        receiver: SessionToken,
        body: String,
    ) -> Result<Message, RelayError> {
        let target = self
            .registry
            .lookup(receiver)
            .await
            .ok_or(RelayError::ReceiverNotFound(receiver))?;

        let message = Message::new(sender, receiver, body);
        target.enqueue_message(message.clone());

        info!(
            sender = %sender,
            receiver = %target.display_name,
            "direct message routed"
        );

        Ok(message)
    }
}
