//! The posting engine: balance effects of validated transactions.
//!
//! `post` is pure arithmetic over the balance the caller holds exclusive
//! access to. The storage layer runs it inside the account's critical
//! section, so the insufficient-funds re-check here closes the race between
//! validation and commit: a withdrawal validated against a stale balance
//! fails here instead of driving the balance negative.

use arca_shared::types::Money;

use super::error::LedgerError;
use super::types::{TransactionKind, TransactionRecord, ValidatedTransaction};

/// Computes ledger balance transitions.
///
/// Stateless; all state lives with the caller. This keeps the non-negative
/// balance invariant enforced at a single commit boundary instead of being
/// scattered across save hooks.
pub struct LedgerEngine;

impl LedgerEngine {
    /// Applies a validated transaction to a balance, returning the new
    /// balance.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientFunds`] if a withdrawal exceeds the
    ///   balance at this instant (the commit-time re-check). No mutation
    ///   has happened; the caller must abandon the commit.
    /// - [`LedgerError::BalanceOverflow`] if the deposit would overflow.
    pub fn post(
        balance: Money,
        transaction: ValidatedTransaction,
    ) -> Result<Money, LedgerError> {
        match transaction.kind {
            TransactionKind::Deposit => balance
                .checked_add(transaction.amount)
                .ok_or(LedgerError::BalanceOverflow),
            TransactionKind::Withdrawal => {
                if balance < transaction.amount {
                    return Err(LedgerError::InsufficientFunds);
                }
                balance
                    .checked_sub(transaction.amount)
                    .ok_or(LedgerError::BalanceOverflow)
            }
        }
    }

    /// Validates that a recorded transaction may be updated or deleted.
    ///
    /// It may not: records settle at creation and their balance effect is
    /// final. Allowing edits without a compensating-entry model would let
    /// the stored balance drift from the log silently.
    pub fn validate_can_mutate(_record: &TransactionRecord) -> Result<(), LedgerError> {
        Err(LedgerError::SettledTransaction)
    }
}
