//! Session lifecycle handlers: register, deregister, list.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use chathub_core::error::AppError;

use crate::dto::request::RegisterRequest;
use crate::dto::response::{ApiResponse, IdentityResponse, SessionListResponse};
use crate::error::ApiError;
use crate::extractors::auth::AuthClient;
use crate::state::AppState;

/// POST /api/sessions — register a new session.
///
/// The only unauthenticated endpoint: no identity exists before it runs.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<IdentityResponse>>), ApiError> {
    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let identity = state.relay.register(&request.display_name).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(IdentityResponse::from(identity))),
    ))
}

/// DELETE /api/sessions/me — deregister the calling session.
pub async fn deregister(
    State(state): State<AppState>,
    AuthClient(client): AuthClient,
) -> Result<Json<ApiResponse<IdentityResponse>>, ApiError> {
    let identity = state.relay.deregister(client.token).await?;
    Ok(Json(ApiResponse::ok(IdentityResponse::from(identity))))
}

/// GET /api/sessions — snapshot of active sessions.
pub async fn list(
    State(state): State<AppState>,
    AuthClient(_client): AuthClient,
) -> Json<ApiResponse<SessionListResponse>> {
    let sessions: Vec<IdentityResponse> = state
        .relay
        .list()
        .await
        .into_iter()
        .map(IdentityResponse::from)
        .collect();
    let total = sessions.len();

    Json(ApiResponse::ok(SessionListResponse { sessions, total }))
}
