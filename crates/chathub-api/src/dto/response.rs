//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use chathub_core::types::SessionToken;
use chathub_entity::identity::Identity;
use chathub_entity::message::Message;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Public identity of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityResponse {
    /// Identity token.
    pub token: SessionToken,
    /// Display name.
    pub display_name: String,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            token: identity.token,
            display_name: identity.display_name,
        }
    }
}

/// Snapshot of active sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionListResponse {
    /// Active identities, unordered.
    pub sessions: Vec<IdentityResponse>,
    /// Number of active sessions.
    pub total: usize,
}

/// Echo of a routed direct message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Sender token.
    pub sender: SessionToken,
    /// Receiver token.
    pub receiver: SessionToken,
    /// Message body.
    pub body: String,
    /// Server-assigned send timestamp.
    pub sent_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            sender: message.sender,
            receiver: message.receiver,
            body: message.body,
            sent_at: message.sent_at,
        }
    }
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Number of active sessions.
    pub active_sessions: usize,
}
