//! Session Error Types
//!
//! Errors raised while restoring or persisting a session. The store itself
//! swallows them; they surface only through the repository API.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::StorageError;
use thiserror::Error;

/// Session-specific result type alias
pub type SessionResult<T> = Result<T, SessionError>;

/// Session-specific error variants
#[derive(Debug, Error)]
pub enum SessionError {
    /// Role text is not one of customer, owner, admin
    #[error("Unknown role: {0}")]
    InvalidRole(String),

    /// A credential field is present but blank
    #[error("Session field is empty: {0}")]
    EmptyField(&'static str),

    /// Storage backend failure
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::InvalidRole(_) | SessionError::EmptyField(_) => {
                ErrorKind::UnprocessableEntity
            }
            SessionError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self, context: &'static str) {
        match self {
            SessionError::Storage(e) => {
                tracing::warn!(error = %e, context, "Session storage failure");
            }
            _ => {
                tracing::warn!(error = %self, context, "Discarding invalid persisted session");
            }
        }
    }
}
