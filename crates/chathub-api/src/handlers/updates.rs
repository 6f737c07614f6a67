//! WebSocket update stream handler.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tracing::{error, info, warn};

use chathub_relay::auth::AuthenticatedClient;
use chathub_relay::error::RelayError;
use chathub_relay::stream::UpdateMultiplexer;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameter for WebSocket authentication.
#[derive(Debug, serde::Deserialize)]
pub struct WsQuery {
    /// Identity token.
    pub token: String,
}

/// GET /ws?token={token} — WebSocket upgrade onto the update stream.
///
/// Authentication happens before the upgrade, and the validated client
/// stays bound to the stream task for its entire lifetime.
pub async fn ws_upgrade(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
) -> Result<Response, ApiError> {
    let client = state
        .relay
        .authenticator
        .authenticate(Some(&query.token))
        .await?;

    let mux = state.relay.open_stream(&client).await?;

    Ok(ws.on_upgrade(move |socket| stream_updates(state, client, mux, socket)))
}

/// Pumps the session's multiplexer onto an established WebSocket.
async fn stream_updates(
    state: AppState,
    client: AuthenticatedClient,
    mut mux: UpdateMultiplexer,
    socket: WebSocket,
) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    info!(
        token = %client.token,
        display_name = %client.display_name,
        "update stream opened"
    );

    loop {
        tokio::select! {
            update = mux.next_update() => {
                let Some(update) = update else {
                    // Clean termination: self-Left delivered, or both
                    // queues closed after removal from the registry.
                    break;
                };

                let frame = match serde_json::to_string(&update) {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!(token = %client.token, error = %e, "failed to serialize update");
                        continue;
                    }
                };

                if ws_tx.send(Message::Text(frame.into())).await.is_err() {
                    warn!(token = %client.token, "peer gone, ending update stream");
                    break;
                }
            }
            inbound = ws_rx.next() => {
                match inbound {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        warn!(token = %client.token, error = %e, "WebSocket error");
                        break;
                    }
                    // The update stream is server-to-client only; other
                    // inbound frames are ignored.
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    // A stream that ended without the self-Left signal belongs to an
    // orphaned session (transport failure or silent disconnect); clean
    // it up through the same path an explicit Deregister takes.
    if !mux.is_terminated() {
        match state.relay.deregister(client.token).await {
            Ok(_) | Err(RelayError::NotFound(_)) => {}
            Err(e) => {
                warn!(token = %client.token, error = %e, "orphan cleanup failed");
            }
        }
    }

    let _ = ws_tx.send(Message::Close(None)).await;

    info!(
        token = %client.token,
        display_name = %client.display_name,
        "update stream closed"
    );
}
