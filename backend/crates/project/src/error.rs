//! Project Error Types
//!
//! Project-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Project-specific result type alias
pub type ProjectResult<T> = Result<T, ProjectError>;

/// Project-specific error variants
#[derive(Debug, Error)]
pub enum ProjectError {
    /// No project with this id owned by the caller
    #[error("Project not found")]
    NotFound,

    /// Id is not a 24-character hex document id
    #[error("Invalid project id: {0}")]
    InvalidId(String),

    /// Request body rejected (unknown field, bad JSON, bad value)
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Authentication failure surfaced by a handler
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProjectError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProjectError::NotFound => StatusCode::NOT_FOUND,
            ProjectError::InvalidId(_) | ProjectError::InvalidField(_) => StatusCode::BAD_REQUEST,
            ProjectError::Auth(e) => e.status_code(),
            ProjectError::Database(_) | ProjectError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProjectError::NotFound => ErrorKind::NotFound,
            ProjectError::InvalidId(_) | ProjectError::InvalidField(_) => ErrorKind::BadRequest,
            ProjectError::Auth(e) => e.kind(),
            ProjectError::Database(_) | ProjectError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Client-facing message
    fn public_message(&self) -> String {
        match self {
            ProjectError::Auth(e) => e.public_message(),
            ProjectError::Database(_) | ProjectError::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProjectError::Database(e) => {
                tracing::error!(error = %e, "Project database error");
            }
            ProjectError::Internal(msg) => {
                tracing::error!(message = %msg, "Project internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Project error");
            }
        }
    }
}

impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        let message = err.public_message();
        match err {
            ProjectError::NotFound => AppError::not_found(message),
            ProjectError::Database(e) => AppError::internal(message).with_source(e),
            ProjectError::Auth(e) => e.to_app_error(),
            other => AppError::new(other.kind(), message),
        }
    }
}

impl IntoResponse for ProjectError {
    fn into_response(self) -> Response {
        match self {
            ProjectError::Auth(e) => e.into_response(),
            other => {
                other.log();
                AppError::from(other).into_response()
            }
        }
    }
}
