//! Relay engine configuration.

use serde::{Deserialize, Serialize};

/// Relay engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Capacity of each session's inbound direct-message queue.
    #[serde(default = "default_message_queue_capacity")]
    pub message_queue_capacity: usize,
    /// Capacity of each session's inbound presence-event queue.
    #[serde(default = "default_presence_queue_capacity")]
    pub presence_queue_capacity: usize,
    /// Maximum display name length in characters.
    #[serde(default = "default_max_display_name_chars")]
    pub max_display_name_chars: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            message_queue_capacity: default_message_queue_capacity(),
            presence_queue_capacity: default_presence_queue_capacity(),
            max_display_name_chars: default_max_display_name_chars(),
        }
    }
}

fn default_message_queue_capacity() -> usize {
    100
}

fn default_presence_queue_capacity() -> usize {
    100
}

fn default_max_display_name_chars() -> usize {
    64
}
