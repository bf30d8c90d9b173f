//! Application-wide error types.
//!
//! This is the boundary taxonomy the embedding application consumes. The
//! service layer maps every domain error into one of these variants; the
//! `Forbidden` variant deliberately carries no detail so callers cannot
//! probe for membership or account existence.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Access denied. Intentionally opaque.
    #[error("Access denied")]
    Forbidden,

    /// A transaction payload failed validation before any mutation.
    #[error("Validation error on {field}: {reason}")]
    Validation {
        /// The payload field that failed.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// A withdrawal lost the race between validation and commit.
    #[error("Insufficient funds at commit time")]
    InsufficientFunds,

    /// A business rule refused the operation after authorization passed.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Resource not found (only surfaced once access is established).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected storage or arithmetic failure. Intentionally opaque.
    #[error("Internal error")]
    Internal,
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Forbidden => 403,
            Self::Validation { .. } => 400,
            Self::InsufficientFunds | Self::BusinessRule(_) => 422,
            Self::NotFound(_) => 404,
            Self::Internal => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Forbidden => "FORBIDDEN",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::InsufficientFunds => "INSUFFICIENT_FUNDS",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}
