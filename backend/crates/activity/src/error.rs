//! Activity Error Types

use axum::extract::rejection::{FormRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type ActivityResult<T> = Result<T, ActivityError>;

#[derive(Debug, Error)]
pub enum ActivityError {
    /// Rejected form submission
    #[error("{0}")]
    Validation(String),

    #[error("No activity with id {0}")]
    NotFound(i64),
}

impl ActivityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ActivityError::Validation(_) => StatusCode::BAD_REQUEST,
            ActivityError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ActivityError::Validation(_) => ErrorKind::BadRequest,
            ActivityError::NotFound(_) => ErrorKind::NotFound,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Activity request rejected");
        self.to_app_error().into_response()
    }
}

impl From<FormRejection> for ActivityError {
    fn from(rejection: FormRejection) -> Self {
        ActivityError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ActivityError {
    fn from(rejection: PathRejection) -> Self {
        ActivityError::Validation(rejection.body_text())
    }
}
