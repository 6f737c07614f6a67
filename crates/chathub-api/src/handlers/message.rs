//! Direct message handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use chathub_core::error::AppError;

use crate::dto::request::SendMessageRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::auth::AuthClient;
use crate::state::AppState;

/// POST /api/messages — send a direct message.
///
/// Returns the server-stamped message for local echo; delivery onto the
/// receiver's stream is best-effort.
pub async fn send(
    State(state): State<AppState>,
    AuthClient(client): AuthClient,
    Json(request): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MessageResponse>>), ApiError> {
    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let message = state
        .relay
        .send_message(&client, request.receiver, request.body)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(MessageResponse::from(message))),
    ))
}
