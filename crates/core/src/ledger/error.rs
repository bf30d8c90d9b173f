//! Ledger error types.

use thiserror::Error;

/// Errors from payload validation, applied in rule order.
///
/// Validation runs before any mutation; none of these imply a state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The amount was zero or negative.
    #[error("The transaction amount must be greater than zero")]
    NonPositiveAmount,

    /// A withdrawal exceeded the balance observed at validation time.
    #[error("Insufficient funds in the account for this withdrawal")]
    InsufficientFunds,

    /// The requested kind is not "deposit" or "withdrawal".
    #[error("Unknown transaction type: {0}")]
    UnknownKind(String),
}

impl ValidationError {
    /// The payload field the rule applies to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount | Self::InsufficientFunds => "amount",
            Self::UnknownKind(_) => "transaction_type",
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::InsufficientFunds => "INSUFFICIENT_FUNDS",
            Self::UnknownKind(_) => "UNKNOWN_TRANSACTION_TYPE",
        }
    }
}

/// Errors from the posting engine and the commit path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A withdrawal lost the race between validation and commit: the
    /// balance re-check at commit time found insufficient funds. Distinct
    /// from [`ValidationError::InsufficientFunds`], which is the
    /// validation-time check against a possibly stale balance.
    #[error("Insufficient funds at commit time")]
    InsufficientFunds,

    /// Balance arithmetic overflowed. No mutation took place.
    #[error("Balance arithmetic overflow")]
    BalanceOverflow,

    /// The target transaction has settled and cannot be updated or deleted;
    /// its balance effect is final.
    #[error("Cannot modify a settled transaction")]
    SettledTransaction,
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientFunds => "INSUFFICIENT_FUNDS",
            Self::BalanceOverflow => "BALANCE_OVERFLOW",
            Self::SettledTransaction => "SETTLED_TRANSACTION",
        }
    }
}
