//! Storage error types.

use thiserror::Error;

use arca_core::ledger::LedgerError;
use arca_shared::types::AccountId;

/// Errors from the storage layer.
///
/// These are internal to the service boundary: the service maps
/// `AccountNotFound` into an opaque denial so callers cannot probe for
/// account existence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No account with this ID exists.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// An account cannot be opened with a negative balance.
    #[error("Opening balance cannot be negative")]
    NegativeOpeningBalance,

    /// The commit was refused by the posting engine.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The transaction log lock was poisoned by a panicking writer.
    #[error("Transaction log unavailable")]
    LogPoisoned,
}
