//! Credential relay route.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::post,
};
use jira_relay_types::RELAY_PATH;
use serde::Deserialize;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, ErrorCode},
};

/// Fields are optional so that a missing field maps to "Missing credentials."
/// instead of a deserialization rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthenticatePayload {
    email: Option<String>,
    domain: Option<String>,
    api_token: Option<String>,
}

/// POST /jira-authenticate
/// Verifies Jira credentials against `/rest/api/3/myself` and returns the profile.
async fn authenticate(
    State(app_state): State<AppState>,
    payload: Result<Json<AuthenticatePayload>, JsonRejection>,
) -> Response {
    let Ok(Json(payload)) = payload else {
        tracing::warn!(code = ErrorCode::InvalidRequest.as_str(), "Unreadable relay body");
        return AppError::InvalidRequest.into_response();
    };

    app_state
        .relay_use_cases
        .authenticate(
            payload.email.as_deref().unwrap_or_default(),
            payload.domain.as_deref().unwrap_or_default(),
            payload.api_token.as_deref().unwrap_or_default(),
        )
        .await
        .into_response()
}

pub fn router() -> Router<AppState> {
    Router::new().route(RELAY_PATH, post(authenticate))
}
