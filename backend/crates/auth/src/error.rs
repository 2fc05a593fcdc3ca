//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. The messages of the user-facing
//! variants are shown verbatim as inline form messages.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

use crate::domain::services::AdmissionFailure;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// No row matches identifier and secret
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// First matching row is not active
    #[error("Account is inactive or suspended")]
    AccountInactive,

    /// Registration form has an empty field
    #[error("All fields are required.")]
    MissingFields,

    /// Registration secret and confirmation differ
    #[error("Passwords do not match.")]
    SecretMismatch,

    #[error("Username already exists.")]
    DuplicateRegistration,

    /// Session handle missing, unknown or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Role gate refused the caller
    #[error("Access Denied")]
    AccessDenied,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::AccountInactive | AuthError::AccessDenied => ErrorKind::Forbidden,
            AuthError::MissingFields | AuthError::SecretMismatch => ErrorKind::BadRequest,
            AuthError::DuplicateRegistration => ErrorKind::Conflict,
            AuthError::Storage(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::SessionInvalid => err.with_action("Please log in again."),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Storage(e) => {
                tracing::error!(error = %e, "Auth storage error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccountInactive => {
                tracing::warn!("Login attempt on inactive account");
            }
            AuthError::AccessDenied => {
                tracing::warn!("Role gate denied access");
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

impl From<AdmissionFailure> for AuthError {
    fn from(failure: AdmissionFailure) -> Self {
        match failure {
            AdmissionFailure::InvalidCredentials => AuthError::InvalidCredentials,
            AdmissionFailure::AccountInactive => AuthError::AccountInactive,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}
