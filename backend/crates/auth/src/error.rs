//! Auth Error Types
//!
//! Auth-specific error variants that render through the unified
//! `kernel::error::AppError` response format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Message for every rejected login, whether or not the email exists
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid Email or Password.";

/// Message for every rejected session token
pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No session cookie on the request
    #[error("Session token missing")]
    MissingToken,

    /// Undecodable token, bad signature, or subject no longer exists
    #[error("Session token malformed")]
    MalformedToken,

    /// Signature valid but `now >= expiresAt`
    #[error("Session token expired")]
    ExpiredToken,

    /// Request could not be understood
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid runtime configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// True for the three session-token rejections
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            AuthError::MissingToken | AuthError::MalformedToken | AuthError::ExpiredToken
        )
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::MalformedToken
            | AuthError::ExpiredToken => StatusCode::UNAUTHORIZED,
            AuthError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AuthError::Configuration(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::MalformedToken
            | AuthError::ExpiredToken => ErrorKind::Unauthorized,
            AuthError::InvalidRequest(_) => ErrorKind::BadRequest,
            AuthError::Configuration(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Client-facing message; never reveals which token check failed
    pub fn public_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            AuthError::MissingToken | AuthError::MalformedToken | AuthError::ExpiredToken => {
                AUTH_REQUIRED_MESSAGE.to_string()
            }
            AuthError::InvalidRequest(msg) => msg.clone(),
            AuthError::Configuration(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let message = self.public_message();
        match self.kind() {
            ErrorKind::Unauthorized => AppError::unauthorized(message),
            ErrorKind::BadRequest => AppError::bad_request(message),
            _ => AppError::internal(message),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) | AuthError::Configuration(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::MalformedToken => {
                tracing::warn!("Rejected malformed session token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = vec![
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::MissingToken, StatusCode::UNAUTHORIZED),
            (AuthError::MalformedToken, StatusCode::UNAUTHORIZED),
            (AuthError::ExpiredToken, StatusCode::UNAUTHORIZED),
            (
                AuthError::InvalidRequest("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AuthError::Database(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected);
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_token_errors_share_one_public_message() {
        let messages: Vec<String> = [
            AuthError::MissingToken,
            AuthError::MalformedToken,
            AuthError::ExpiredToken,
        ]
        .iter()
        .map(AuthError::public_message)
        .collect();

        assert!(messages.iter().all(|m| m == AUTH_REQUIRED_MESSAGE));
    }

    #[test]
    fn test_internal_details_are_not_public() {
        let err = AuthError::Internal("secret stack detail".into());
        assert!(!err.public_message().contains("secret"));
        assert!(err.to_string().contains("secret"));
    }

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(
            AuthError::InvalidCredentials.public_message(),
            "Invalid Email or Password."
        );
    }
}
