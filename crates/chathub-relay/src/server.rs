//! Top-level relay engine that ties together all subsystems.

use std::sync::Arc;

use tracing::info;

use chathub_core::config::relay::RelayConfig;
use chathub_core::types::SessionToken;
use chathub_entity::identity::Identity;
use chathub_entity::message::Message;

use crate::auth::{AuthenticatedClient, ClientAuthenticator};
use crate::error::RelayError;
use crate::router::MessageRouter;
use crate::session::registry::SessionRegistry;
use crate::stream::UpdateMultiplexer;

/// Central engine coordinating registration, authentication, routing,
/// and update streaming.
#[derive(Debug, Clone)]
pub struct RelayEngine {
    /// Session registry.
    pub registry: Arc<SessionRegistry>,
    /// Message router.
    pub router: MessageRouter,
    /// Identity-token authenticator.
    pub authenticator: ClientAuthenticator,
    /// Configuration.
    config: RelayConfig,
}

impl RelayEngine {
    /// Create an engine with all subsystems.
    pub fn new(config: RelayConfig) -> Self {
        let registry = Arc::new(SessionRegistry::new(config.clone()));
        let router = MessageRouter::new(registry.clone());
        let authenticator = ClientAuthenticator::new(registry.clone());

        info!("relay engine initialized");

        Self {
            registry,
            router,
            authenticator,
            config,
        }
    }

    /// Register a new session and return its public identity.
    pub async fn register(&self, display_name: &str) -> Result<Identity, RelayError> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(RelayError::InvalidDisplayName(
                "display name must not be empty".into(),
            ));
        }
        if display_name.chars().count() > self.config.max_display_name_chars {
            return Err(RelayError::InvalidDisplayName(format!(
                "display name exceeds {} characters",
                self.config.max_display_name_chars
            )));
        }

        let handle = self.registry.register(display_name).await?;
        Ok(handle.identity())
    }

    /// Deregister the session holding `token`.
    pub async fn deregister(&self, token: SessionToken) -> Result<Identity, RelayError> {
        self.registry.deregister(token).await
    }

    /// Snapshot of all active identities.
    pub async fn list(&self) -> Vec<Identity> {
        self.registry.list().await
    }

    /// Number of active sessions.
    pub async fn active_sessions(&self) -> usize {
        self.registry.count().await
    }

    /// Route a direct message from the authenticated caller.
    pub async fn send_message(
        &self,
        client: &AuthenticatedClient,
        receiver: SessionToken,
        body: String,
    ) -> Result<Message, RelayError> {
        self.router.send(client.token, receiver, body).await
    }

    /// Open the caller's update stream.
    ///
    /// Claims the session's queue receivers; each session supports
    /// exactly one concurrent stream.
    pub async fn open_stream(
        &self,
        client: &AuthenticatedClient,
    ) -> Result<UpdateMultiplexer, RelayError> {
        let session = self
            .registry
            .lookup(client.token)
            .await
            .ok_or(RelayError::NotFound(client.token))?;

        let queues = session
            .take_queues()
            .ok_or(RelayError::StreamAlreadyOpen(client.token))?;

        Ok(UpdateMultiplexer::new(session.token, queues))
    }
}
