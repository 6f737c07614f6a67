//! Identity-token authentication for protected operations.

use std::sync::Arc;

use chathub_core::types::SessionToken;

use crate::error::RelayError;
use crate::session::registry::SessionRegistry;

/// Validated caller identity, threaded explicitly from the authenticator
/// into every handler. Register is the only operation that runs without
/// one.
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    /// The caller's session token.
    pub token: SessionToken,
    /// The caller's display name at authentication time.
    pub display_name: String,
}

/// Validates identity tokens against the session registry.
#[derive(Debug, Clone)]
pub struct ClientAuthenticator {
    /// Registry used to resolve tokens.
    registry: Arc<SessionRegistry>,
}

impl ClientAuthenticator {
    /// Create an authenticator backed by the given registry.
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Authenticate a raw token taken from call metadata.
    ///
    /// A missing, malformed, or unknown token rejects the call before
    /// any handler runs. For the long-lived update stream, the returned
    /// client stays captured by the stream task for its whole life.
    pub async fn authenticate(&self, raw: Option<&str>) -> Result<AuthenticatedClient, RelayError> {
        let raw = raw.ok_or_else(|| RelayError::Unauthenticated("missing identity token".into()))?;

        let token: SessionToken = raw
            .parse()
            .map_err(|_| RelayError::Unauthenticated("malformed identity token".into()))?;

        let session = self
            .registry
            .lookup(token)
            .await
            .ok_or_else(|| RelayError::Unauthenticated(format!("unknown identity token {token}")))?;

        Ok(AuthenticatedClient {
            token: session.token,
            display_name: session.display_name.clone(),
        })
    }
}
