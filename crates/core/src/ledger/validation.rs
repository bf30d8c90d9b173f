//! Transaction payload validation.
//!
//! Rules run in a fixed order and the first failure wins:
//! 1. the amount must be positive at scale 2;
//! 2. a withdrawal must be covered by the balance observed now (the engine
//!    re-checks this at commit time under the account lock);
//! 3. the kind must name a known transaction type.

use arca_shared::types::Money;

use super::error::ValidationError;
use super::types::{TransactionDraft, TransactionKind, ValidatedTransaction};

/// Validates a raw transaction request against the current balance.
///
/// Pure: no mutation happens here or because of this. The returned
/// [`ValidatedTransaction`] is the only way into the posting engine.
pub fn validate(
    draft: &TransactionDraft,
    balance: Money,
) -> Result<ValidatedTransaction, ValidationError> {
    let amount = Money::new(draft.amount);
    if !amount.is_positive() {
        return Err(ValidationError::NonPositiveAmount);
    }

    // Rule order is part of the contract: a withdrawal overdraft is
    // reported before a malformed kind string would be.
    if draft.kind == "withdrawal" && balance < amount {
        return Err(ValidationError::InsufficientFunds);
    }

    let kind = match draft.kind.as_str() {
        "deposit" => TransactionKind::Deposit,
        "withdrawal" => TransactionKind::Withdrawal,
        other => return Err(ValidationError::UnknownKind(other.to_string())),
    };

    Ok(ValidatedTransaction { kind, amount })
}
