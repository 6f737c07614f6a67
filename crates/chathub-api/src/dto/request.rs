//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use chathub_core::types::SessionToken;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired display name.
    #[validate(length(min = 1, max = 64, message = "Display name must be 1-64 characters"))]
    pub display_name: String,
}

/// Direct message send request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    /// Token of the receiving session.
    pub receiver: SessionToken,
    /// Message body text.
    #[validate(length(min = 1, max = 4096, message = "Body must be 1-4096 characters"))]
    pub body: String,
}
