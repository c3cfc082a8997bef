//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed or missing input, rejected before any hashing or store access
    #[error("{0}")]
    Validation(String),

    /// An account with this email already exists
    #[error("An account with that email already exists")]
    DuplicateEmail,

    /// No account matches the email
    #[error("No user with that email exists")]
    NoSuchUser,

    /// The account exists but the password does not verify
    #[error("Email address and password do not match")]
    CredentialMismatch,

    /// The credential store could not be reached
    #[error("Credential store unavailable: {0}")]
    StorageUnavailable(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::DuplicateEmail => StatusCode::CONFLICT,
            AuthError::NoSuchUser | AuthError::CredentialMismatch => StatusCode::UNAUTHORIZED,
            AuthError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::DuplicateEmail => ErrorKind::Conflict,
            AuthError::NoSuchUser | AuthError::CredentialMismatch => ErrorKind::Unauthorized,
            AuthError::StorageUnavailable(_) => ErrorKind::ServiceUnavailable,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Collapse `NoSuchUser` into `CredentialMismatch` unless unknown
    /// emails may be revealed to the caller
    pub fn for_client(self, reveal_unknown_email: bool) -> Self {
        match self {
            AuthError::NoSuchUser if !reveal_unknown_email => AuthError::CredentialMismatch,
            other => other,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details stay in the logs; clients get a generic message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::StorageUnavailable(_) => {
                AppError::service_unavailable("Service temporarily unavailable")
                    .with_action("Please try again later")
            }
            AuthError::Internal(_) => AppError::internal("Internal server error"),
            AuthError::DuplicateEmail => AppError::new(self.kind(), self.to_string())
                .with_action("Sign in instead, or use a different email address"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::CredentialMismatch => {
                tracing::warn!("Invalid login attempt");
            }
            _ if self.kind().is_server_error() => {
                tracing::error!(error = %self, "Auth server error");
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

impl From<axum::extract::rejection::JsonRejection> for AuthError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AuthError::Validation(rejection.body_text())
    }
}

impl From<platform::password::PasswordPolicyError> for AuthError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("Blocking task failed: {err}"))
    }
}
