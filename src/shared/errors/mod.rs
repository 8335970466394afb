//! Error Types
//!
//! Domain-specific error types with proper HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::domain::models::record_id::InvalidRecordId;

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Errors from the external OAuth identity provider
#[derive(Debug, Error)]
pub enum OAuthError {
    #[error("OAuth transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OAuth provider error: {0}")]
    Provider(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    OAuth(#[from] OAuthError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) | Self::OAuth(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) | Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A single failed validation check: a failure kind paired with the
/// human-readable message of the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub kind: &'static str,
    pub message: String,
}

impl ValidationFailure {
    #[must_use]
    pub fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    /// Request shape failed validation. Deliberately 412 rather than 400/422
    /// so clients can tell "field content invalid" apart from malformed
    /// syntax or semantic conflicts.
    #[error("Precondition failed")]
    PreconditionFailed(Vec<ValidationFailure>),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::PreconditionFailed(failures) => {
                let errors: Vec<serde_json::Value> = failures
                    .iter()
                    .map(|f| {
                        let mut entry = serde_json::Map::new();
                        entry.insert(
                            f.kind.to_string(),
                            serde_json::Value::String(f.message.clone()),
                        );
                        serde_json::Value::Object(entry)
                    })
                    .collect();
                (
                    StatusCode::PRECONDITION_FAILED,
                    Json(serde_json::json!({ "errors": errors })),
                )
                    .into_response()
            }
            ApiError::UseCase(uc_error) => {
                let status = uc_error.status_code();
                let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %uc_error, "Request failed");
                    "Something went wrong!".to_string()
                } else {
                    uc_error.to_string()
                };
                (status, Json(serde_json::json!({ "message": message }))).into_response()
            }
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "message": message })),
            )
                .into_response(),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "message": "Something went wrong!" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<InvalidRecordId> for ApiError {
    fn from(err: InvalidRecordId) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {err}"))
    }
}
