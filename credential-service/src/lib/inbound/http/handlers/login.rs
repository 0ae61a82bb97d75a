use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ApiSuccess;
use super::CredentialsRequest;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<ApiSuccess, ApiError> {
    let Json(body) = payload?;
    let command = body.try_into_authenticate_command()?;

    // An unknown identifier and a wrong secret both surface as
    // InvalidCredentials, so the response never reveals which one it was.
    state
        .account_service
        .authenticate(command)
        .await
        .map_err(|e| ApiError::from_account_error(e, state.show_error_details))
        .map(|_| ApiSuccess::new(StatusCode::OK, "Authenticated"))
}
