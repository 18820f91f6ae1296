//! Error Types
//!
//! Error types for each layer with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::UseCase(uc_error) => (
                uc_error.status_code(),
                uc_error.error_code().to_string(),
                uc_error.to_string(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorDetail { code, message },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}
