use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::account::errors::AccountError;
use crate::account::models::AuthenticateCommand;
use crate::account::models::Identifier;
use crate::account::models::RegisterCommand;

pub mod health;
pub mod login;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess(StatusCode, Json<ApiMessageBody>);

impl PartialEq for ApiSuccess {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl ApiSuccess {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiSuccess(
            status,
            Json(ApiMessageBody {
                message: message.into(),
            }),
        )
    }
}

impl IntoResponse for ApiSuccess {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiMessageBody {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    // Optional failure detail, included in the body only in development
    InternalServerError(Option<String>),
}

impl ApiError {
    /// Map a domain error to its HTTP shape.
    ///
    /// `show_details` gates whether 500 responses carry the underlying
    /// error message.
    pub fn from_account_error(err: AccountError, show_details: bool) -> Self {
        match err {
            AccountError::AlreadyExists(_) => ApiError::BadRequest(err.to_string()),
            AccountError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AccountError::InvalidIdentifier(_) => ApiError::BadRequest(err.to_string()),
            AccountError::Hash(_) | AccountError::DatabaseError(_) | AccountError::Unknown(_) => {
                ApiError::InternalServerError(show_details.then(|| err.to_string()))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            ApiError::InternalServerError(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                details,
            ),
        };

        (status, Json(ApiErrorBody { error, details })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// HTTP request body shared by registration and login (raw JSON).
///
/// Absent fields deserialize as empty strings so that a missing field and
/// an empty one take the same rejection path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    identifier: String,
    #[serde(default)]
    secret: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("identifier and secret are required")]
pub struct MissingFieldsError;

impl CredentialsRequest {
    fn into_fields(self) -> Result<(Identifier, String), MissingFieldsError> {
        if self.secret.is_empty() {
            return Err(MissingFieldsError);
        }
        let identifier = Identifier::new(self.identifier).map_err(|_| MissingFieldsError)?;
        Ok((identifier, self.secret))
    }

    pub fn try_into_register_command(self) -> Result<RegisterCommand, MissingFieldsError> {
        let (identifier, secret) = self.into_fields()?;
        Ok(RegisterCommand::new(identifier, secret))
    }

    pub fn try_into_authenticate_command(self) -> Result<AuthenticateCommand, MissingFieldsError> {
        let (identifier, secret) = self.into_fields()?;
        Ok(AuthenticateCommand::new(identifier, secret))
    }
}

impl From<MissingFieldsError> for ApiError {
    fn from(err: MissingFieldsError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
