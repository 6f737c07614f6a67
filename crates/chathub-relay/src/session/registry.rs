//! Session registry — the authoritative map of active sessions.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use chathub_core::config::relay::RelayConfig;
use chathub_core::types::SessionToken;
use chathub_entity::identity::Identity;

use crate::broadcast::PresenceBroadcaster;
use crate::error::RelayError;

use super::handle::SessionHandle;

/// The sole source of truth for who is online.
///
/// Every operation serializes through one mutex around the whole session
/// map, which also makes each registration or removal atomic with the
/// presence broadcast announcing it: no observer can see the map change
/// without the matching event already sitting in its queue.
#[derive(Debug)]
pub struct SessionRegistry {
    /// Token → session handle.
    sessions: Mutex<HashMap<SessionToken, Arc<SessionHandle>>>,
    /// Presence fanout, invoked under the map lock.
    broadcaster: PresenceBroadcaster,
    /// Queue capacities for new sessions.
    config: RelayConfig,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new(config: RelayConfig) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            broadcaster: PresenceBroadcaster::new(),
            config,
        }
    }

    /// Register a new session under `display_name`.
    ///
    /// Allocates a fresh token, inserts the session, and announces the
    /// join to every other active session, all under the map lock.
    pub async fn register(&self, display_name: &str) -> Result<Arc<SessionHandle>, RelayError> {
        let mut sessions = self.sessions.lock().await;

        if sessions
            .values()
            .any(|session| session.display_name == display_name)
        {
            return Err(RelayError::NameTaken(display_name.to_string()));
        }

        let handle = Arc::new(SessionHandle::new(display_name, &self.config));
        sessions.insert(handle.token, handle.clone());

        self.broadcaster.announce_join(&handle, sessions.values());

        info!(
            token = %handle.token,
            display_name = %handle.display_name,
            online = sessions.len(),
            "session registered"
        );

        Ok(handle)
    }

    /// Deregister the session holding `token`.
    ///
    /// Announces the departure to every active session — the departing
    /// one included, which ends its own update stream — and only then
    /// removes it from the map.
    pub async fn deregister(&self, token: SessionToken) -> Result<Identity, RelayError> {
        let mut sessions = self.sessions.lock().await;

        let handle = sessions
            .get(&token)
            .cloned()
            .ok_or(RelayError::NotFound(token))?;

        self.broadcaster.announce_leave(&handle, sessions.values());
        sessions.remove(&token);

        info!(
            token = %handle.token,
            display_name = %handle.display_name,
            online = sessions.len(),
            "session deregistered"
        );

        Ok(handle.identity())
    }

    /// Look up the session holding `token`.
    pub async fn lookup(&self, token: SessionToken) -> Option<Arc<SessionHandle>> {
        self.sessions.lock().await.get(&token).cloned()
    }

    /// Snapshot of all active identities. No ordering guarantee.
    pub async fn list(&self) -> Vec<Identity> {
        self.sessions
            .lock()
            .await
            .values()
            .map(|session| session.identity())
            .collect()
    }

    /// Number of active sessions.
    pub async fn count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
