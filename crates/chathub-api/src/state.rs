//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chathub_core::config::AppConfig;
use chathub_relay::server::RelayEngine;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Relay engine.
    pub relay: Arc<RelayEngine>,
}

impl AppState {
    /// Build application state from configuration.
    pub fn new(config: AppConfig) -> Self {
        let relay = Arc::new(RelayEngine::new(config.relay.clone()));
        Self {
            config: Arc::new(config),
            relay,
        }
    }
}
