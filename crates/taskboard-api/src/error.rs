use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use taskboard_core::DomainError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
            DomainError::UsernameAlreadyExists(_) => {
                ApiError::Conflict("Username already exists.".to_string())
            }
            DomainError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid username or password.".to_string())
            }
            DomainError::Forbidden(what) => ApiError::Forbidden(what),
            DomainError::NotFound(what) => ApiError::NotFound(what),
            DomainError::PasswordHashError(msg) | DomainError::DatabaseError(msg) => {
                ApiError::InternalError(msg)
            }
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::from(errors).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            },
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, "VALIDATION_ERROR", msg)
            },
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, "AUTHENTICATION_ERROR", msg)
            },
            ApiError::Forbidden(what) => {
                tracing::warn!("Forbidden: {}", what);
                (
                    StatusCode::FORBIDDEN,
                    "AUTHORIZATION_ERROR",
                    "You are not allowed to access this task.".to_string(),
                )
            },
            ApiError::NotFound(what) => {
                tracing::warn!("Not found: {}", what);
                (StatusCode::NOT_FOUND, "NOT_FOUND", format!("Not found: {}", what))
            },
            ApiError::InternalError(msg) => {
                // Details stay in the logs
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            },
        };

        (status, Json(ApiResponse::<()>::error(code, &message))).into_response()
    }
}
