//! Gateway Error Types
//!
//! Failures of remote calls. A non-2xx response is an ordinary outcome
//! (`ApiError::Status`) for the caller; nothing here touches the session.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde::Deserialize;
use thiserror::Error;

/// Gateway result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway error variants
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connect, timeout, TLS, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Token cannot be carried in a header
    #[error("Invalid header value")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    /// Base URL or path could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error body shape used by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: Option<String>,
}

impl ApiError {
    /// Build a status error from a response body
    ///
    /// Uses the body's `message` (or `error`) field when present, otherwise
    /// the canonical reason phrase.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                http::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        ApiError::Status { status, message }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for 401/403 answers (stale or insufficient token)
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Status { status, .. } => ErrorKind::from_status(*status),
            ApiError::Network(e) if e.is_timeout() => ErrorKind::RequestTimeout,
            ApiError::Network(_) => ErrorKind::ServiceUnavailable,
            ApiError::Decode(_) => ErrorKind::BadGateway,
            ApiError::InvalidHeader(_) => ErrorKind::BadRequest,
            ApiError::InvalidUrl(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ApiError::Status { message, .. } => AppError::new(self.kind(), message.clone()),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self, endpoint: &str) {
        match self {
            ApiError::Status { status, message } if *status >= 500 => {
                tracing::error!(endpoint, status, message = %message, "Server error");
            }
            ApiError::Status { status, message } => {
                tracing::debug!(endpoint, status, message = %message, "Request rejected");
            }
            ApiError::Network(e) => {
                tracing::warn!(endpoint, error = %e, "Network failure");
            }
            ApiError::Decode(e) => {
                tracing::warn!(endpoint, error = %e, "Malformed response body");
            }
            _ => {
                tracing::error!(endpoint, error = %self, "Request could not be built");
            }
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(e) => AppError::from(e),
            ApiError::Decode(e) => AppError::from(e),
            other => other.to_app_error(),
        }
    }
}
