//! Mapping domain errors onto the boundary taxonomy.
//!
//! Every failure a request can hit in core or storage lands in exactly one
//! [`AppError`] variant here. Unknown accounts map to `Forbidden`, the same
//! answer a caller without a membership gets, so probing for account
//! existence tells an attacker nothing.

use arca_core::access::AccessError;
use arca_core::ledger::{LedgerError, ValidationError};
use arca_shared::error::AppError;
use arca_store::StoreError;

/// Converts an authorization denial. Always opaque.
#[must_use]
pub fn from_access(_error: AccessError) -> AppError {
    AppError::Forbidden
}

/// Converts a validation failure into a field-tagged error.
#[must_use]
pub fn from_validation(error: &ValidationError) -> AppError {
    AppError::Validation {
        field: error.field(),
        reason: error.to_string(),
    }
}

/// Converts a storage failure.
///
/// `AccountNotFound` is deliberately `Forbidden` rather than `NotFound`:
/// an account the caller holds no membership on and an account that does
/// not exist must be indistinguishable.
#[must_use]
pub fn from_store(error: StoreError) -> AppError {
    match error {
        StoreError::AccountNotFound(_) => AppError::Forbidden,
        StoreError::Ledger(ledger) => from_ledger(ledger),
        StoreError::NegativeOpeningBalance | StoreError::LogPoisoned => AppError::Internal,
    }
}

/// Converts a posting-engine failure.
#[must_use]
pub fn from_ledger(error: LedgerError) -> AppError {
    match error {
        LedgerError::InsufficientFunds => AppError::InsufficientFunds,
        LedgerError::SettledTransaction => AppError::BusinessRule(error.to_string()),
        LedgerError::BalanceOverflow => AppError::Internal,
    }
}
