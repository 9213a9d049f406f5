//! Loan Error Types
//!
//! Loan-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Loan-specific result type alias
pub type LoanResult<T> = Result<T, LoanError>;

/// Loan-specific error variants
#[derive(Debug, Error)]
pub enum LoanError {
    /// The authenticated user is not the applicant named in the request
    #[error("Authenticated user may not file a loan request for another user")]
    Unauthorized,

    /// Input outside the accepted domain (amount, term, paging, missing salary)
    #[error("{0}")]
    InvalidArgument(String),

    /// Unknown loan id or applicant
    #[error("{0}")]
    NotFound(String),

    /// A collaborator failed; passed through unchanged
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Failures raised by the store or the user directory
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} responded with status {status}")]
    Status { service: &'static str, status: u16 },

    /// Stored or received data violates an invariant
    #[error("Corrupt data: {0}")]
    Corrupt(String),
}

impl LoanError {
    pub fn invalid(message: impl Into<String>) -> Self {
        LoanError::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        LoanError::NotFound(message.into())
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoanError::InvalidArgument(_) => ErrorKind::BadRequest,
            LoanError::Unauthorized => ErrorKind::Forbidden,
            LoanError::NotFound(_) => ErrorKind::NotFound,
            LoanError::Upstream(UpstreamError::Corrupt(_)) => ErrorKind::InternalServerError,
            LoanError::Upstream(_) => ErrorKind::ServiceUnavailable,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            e if e.kind().is_server_error() => {
                tracing::error!(error = %e, "Loan upstream failure");
            }
            LoanError::Unauthorized => {
                tracing::warn!("Loan ownership check failed");
            }
            _ => {
                tracing::debug!(error = %self, "Loan error");
            }
        }
    }
}

impl From<sqlx::Error> for LoanError {
    fn from(err: sqlx::Error) -> Self {
        LoanError::Upstream(UpstreamError::Database(err))
    }
}

impl From<reqwest::Error> for LoanError {
    fn from(err: reqwest::Error) -> Self {
        LoanError::Upstream(UpstreamError::Http(err))
    }
}

impl From<LoanError> for AppError {
    fn from(err: LoanError) -> Self {
        err.log();
        let kind = err.kind();
        match err {
            // Collaborator details stay in the logs
            LoanError::Upstream(source @ UpstreamError::Corrupt(_)) => {
                AppError::internal("Stored loan data is inconsistent").with_source(source)
            }
            LoanError::Upstream(source) => {
                AppError::service_unavailable("A dependent service is unavailable")
                    .with_source(source)
            }
            other => AppError::new(kind, other.to_string()),
        }
    }
}

impl IntoResponse for LoanError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
