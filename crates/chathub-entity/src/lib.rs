//! # chathub-entity
//!
//! Domain entity models for ChatHub. Every struct in this crate is an
//! immutable value object exchanged between the relay engine and its
//! callers. All entities derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`.

pub mod identity;
pub mod message;
pub mod presence;
pub mod update;

pub use identity::Identity;
pub use message::Message;
pub use presence::{PresenceEvent, PresenceKind};
pub use update::Update;
