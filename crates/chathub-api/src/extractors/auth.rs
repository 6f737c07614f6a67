//! `AuthClient` extractor — pulls the identity token from the
//! Authorization header, validates it against the registry, and injects
//! the authenticated client into the handler.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use chathub_relay::auth::AuthenticatedClient;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated client available in handlers.
///
/// Register is the only endpoint that does not use this extractor — no
/// identity exists yet when it runs.
#[derive(Debug, Clone)]
pub struct AuthClient(pub AuthenticatedClient);

impl AuthClient {
    /// Returns the inner authenticated client.
    pub fn client(&self) -> &AuthenticatedClient {
        &self.0
    }
}

impl std::ops::Deref for AuthClient {
    type Target = AuthenticatedClient;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthClient {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract the bearer token from the Authorization header; the
        // authenticator handles absence and malformation uniformly.
        let token = parts
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "));

        let client = state.relay.authenticator.authenticate(token).await?;

        Ok(AuthClient(client))
    }
}
