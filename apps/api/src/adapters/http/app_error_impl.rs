use crate::{app_error::AppError, domain::entities::relay_result::RelayResult};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jira_relay_types::{AuthenticateResponse, ErrorResponse};

impl IntoResponse for RelayResult {
    fn into_response(self) -> Response {
        match self {
            RelayResult::Success { myself } => (
                StatusCode::OK,
                Json(AuthenticateResponse { ok: true, myself }),
            )
                .into_response(),
            RelayResult::Failure { status, message } => error_resp(status, message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        RelayResult::from(Err(self)).into_response()
    }
}

fn error_resp(status: u16, message: String) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse { error: message })).into_response()
}
