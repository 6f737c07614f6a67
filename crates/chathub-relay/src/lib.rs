//! # chathub-relay
//!
//! Presence-aware relay engine for ChatHub. Provides:
//!
//! - Session registry with token allocation and display-name uniqueness
//! - Identity-token authentication for every protected operation
//! - Point-to-point message routing onto bounded per-session queues
//! - Join/leave presence fanout
//! - Per-session update multiplexing onto one ordered outbound stream

pub mod auth;
pub mod broadcast;
pub mod error;
pub mod router;
pub mod server;
pub mod session;
pub mod stream;

pub use auth::{AuthenticatedClient, ClientAuthenticator};
pub use broadcast::PresenceBroadcaster;
pub use error::RelayError;
pub use router::MessageRouter;
pub use server::RelayEngine;
pub use session::registry::SessionRegistry;
pub use stream::UpdateMultiplexer;
