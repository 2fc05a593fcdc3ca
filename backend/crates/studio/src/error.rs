//! Studio Error Types
//!
//! Studio-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Backend failures never reach the
//! client as errors; they are turned into fallback output text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

use crate::domain::tool::UnknownTool;
use crate::domain::value_objects::UnknownRefineAction;

/// Studio-specific result type alias
pub type StudioResult<T> = Result<T, StudioError>;

#[derive(Debug, Error)]
pub enum StudioError {
    /// Input is blank after trimming
    #[error("Input is empty")]
    EmptyInput,

    /// Refinement requested with no previous output
    #[error("There is no output to refine")]
    EmptyOutput,

    #[error(transparent)]
    UnknownTool(#[from] UnknownTool),

    #[error(transparent)]
    UnknownRefineAction(#[from] UnknownRefineAction),

    #[error("History entry not found: {0}")]
    HistoryNotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl StudioError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StudioError::EmptyInput
            | StudioError::EmptyOutput
            | StudioError::UnknownTool(_)
            | StudioError::UnknownRefineAction(_) => ErrorKind::BadRequest,
            StudioError::HistoryNotFound(_) => ErrorKind::NotFound,
            StudioError::Storage(_) | StudioError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            StudioError::Storage(e) => {
                tracing::error!(error = %e, "Studio storage error");
            }
            StudioError::Internal(msg) => {
                tracing::error!(message = %msg, "Studio internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Studio error");
            }
        }
    }
}

impl From<StudioError> for AppError {
    fn from(err: StudioError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for StudioError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

/// Generation backend failures
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("Backend request failed: {0}")]
    Request(String),

    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}
