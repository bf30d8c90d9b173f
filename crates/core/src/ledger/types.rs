//! Ledger domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use arca_shared::types::{AccountId, Money, TransactionId, UserId};

/// The two kinds of ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Adds funds to the account balance.
    Deposit,
    /// Removes funds from the account balance.
    Withdrawal,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposit => write!(f, "deposit"),
            Self::Withdrawal => write!(f, "withdrawal"),
        }
    }
}

/// A raw transaction request as received from the boundary layer.
///
/// The kind arrives as an uninterpreted string and the amount at arbitrary
/// precision; [`validate`](super::validate) turns this into a
/// [`ValidatedTransaction`]. The acting user is never part of the payload:
/// it is injected from the authenticated principal.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionDraft {
    /// Requested transaction kind ("deposit" or "withdrawal").
    pub kind: String,
    /// Requested amount.
    pub amount: Decimal,
}

impl TransactionDraft {
    /// Creates a draft request.
    #[must_use]
    pub fn new(kind: impl Into<String>, amount: Decimal) -> Self {
        Self {
            kind: kind.into(),
            amount,
        }
    }
}

/// A transaction request that has passed all validation rules.
///
/// Only the validator constructs this, so holding one proves the amount is
/// positive at scale 2 and the kind is well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedTransaction {
    /// The validated kind.
    pub kind: TransactionKind,
    /// The validated positive amount.
    pub amount: Money,
}

/// An immutable, committed ledger transaction.
///
/// Records are append-only: once created, nothing updates or deletes them
/// through the core. The balance effect happens exactly once, at commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Record identity.
    pub id: TransactionId,
    /// The account the transaction was posted to.
    pub account_id: AccountId,
    /// The user who recorded the transaction.
    pub user_id: UserId,
    /// Deposit or withdrawal.
    pub kind: TransactionKind,
    /// The transaction amount (always positive; the kind carries the sign).
    pub amount: Money,
    /// Server-assigned creation time.
    pub recorded_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Creates a record with a server-assigned timestamp.
    #[must_use]
    pub fn new(
        account_id: AccountId,
        user_id: UserId,
        transaction: ValidatedTransaction,
    ) -> Self {
        Self::backdated(account_id, user_id, transaction, Utc::now())
    }

    /// Creates a record with an explicit timestamp.
    ///
    /// Used by admin and test tooling; regular request handling always goes
    /// through [`TransactionRecord::new`].
    #[must_use]
    pub fn backdated(
        account_id: AccountId,
        user_id: UserId,
        transaction: ValidatedTransaction,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            account_id,
            user_id,
            kind: transaction.kind,
            amount: transaction.amount,
            recorded_at,
        }
    }

    /// The amount with the kind's sign applied: deposits count positive,
    /// withdrawals negative. Used for derived report totals.
    #[must_use]
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Deposit => self.amount,
            TransactionKind::Withdrawal => Money::ZERO - self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn deposit(amount: Decimal) -> ValidatedTransaction {
        ValidatedTransaction {
            kind: TransactionKind::Deposit,
            amount: Money::new(amount),
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TransactionKind::Deposit.to_string(), "deposit");
        assert_eq!(TransactionKind::Withdrawal.to_string(), "withdrawal");
    }

    #[test]
    fn test_record_gets_fresh_identity() {
        let account = AccountId::new();
        let user = UserId::new();
        let a = TransactionRecord::new(account, user, deposit(dec!(1.00)));
        let b = TransactionRecord::new(account, user, deposit(dec!(1.00)));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_signed_amount() {
        let record = TransactionRecord::new(AccountId::new(), UserId::new(), deposit(dec!(20.00)));
        assert_eq!(record.signed_amount(), Money::new(dec!(20.00)));

        let withdrawal = ValidatedTransaction {
            kind: TransactionKind::Withdrawal,
            amount: Money::new(dec!(20.00)),
        };
        let record = TransactionRecord::new(AccountId::new(), UserId::new(), withdrawal);
        assert_eq!(record.signed_amount(), Money::new(dec!(-20.00)));
    }
}
