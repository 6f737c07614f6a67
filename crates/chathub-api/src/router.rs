//! Route definitions for the ChatHub HTTP API.
//!
//! All unary routes are organized by domain and mounted under `/api`;
//! the WebSocket update stream lives at `/ws`. The router receives
//! `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(session_routes())
        .merge(message_routes())
        .merge(health_routes());

    let ws_routes = Router::new().route("/ws", get(handlers::updates::ws_upgrade));

    Router::new()
        .nest("/api", api_routes)
        .merge(ws_routes)
        .with_state(state)
}

/// Session lifecycle endpoints: register, deregister, list.
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(handlers::session::register))
        .route("/sessions", get(handlers::session::list))
        .route("/sessions/me", delete(handlers::session::deregister))
}

/// Direct messaging endpoint.
fn message_routes() -> Router<AppState> {
    Router::new().route("/messages", post(handlers::message::send))
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
