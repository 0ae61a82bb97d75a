use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::CredentialsRequest;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<ApiSuccess, ApiError> {
    let Json(body) = payload?;
    let command = body.try_into_register_command()?;

    state
        .account_service
        .register(command)
        .await
        .map_err(|e| ApiError::from_account_error(e, state.show_error_details))
        .map(|_| ApiSuccess::new(StatusCode::CREATED, "Registered"))
}
