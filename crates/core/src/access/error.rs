//! Access control error types.

use thiserror::Error;

/// Errors from the authorization gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The caller may not perform the requested operation.
    ///
    /// Carries no detail on purpose: a denial must not reveal whether the
    /// account exists or whether the caller holds some lesser role on it.
    #[error("Access denied")]
    Denied,
}

impl AccessError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Denied => "FORBIDDEN",
        }
    }
}
