//! Property-based tests for the posting engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use arca_shared::types::Money;

use super::engine::LedgerEngine;
use super::error::LedgerError;
use super::types::{TransactionKind, ValidatedTransaction};

/// Strategy to generate non-negative balances (0.00 to 10,000,000.00).
fn balance_strategy() -> impl Strategy<Value = Money> {
    (0i64..1_000_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Strategy to generate positive amounts (0.01 to 100,000.00).
fn amount_strategy() -> impl Strategy<Value = Money> {
    (1i64..10_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::Deposit),
        Just(TransactionKind::Withdrawal),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// After any committed posting, the balance is never negative.
    #[test]
    fn prop_committed_balance_never_negative(
        balance in balance_strategy(),
        amount in amount_strategy(),
        kind in kind_strategy(),
    ) {
        let tx = ValidatedTransaction { kind, amount };
        if let Ok(new_balance) = LedgerEngine::post(balance, tx) {
            prop_assert!(!new_balance.is_negative());
        }
    }

    /// Deposits always succeed on a non-negative balance and add exactly
    /// the amount.
    #[test]
    fn prop_deposit_adds_exactly(
        balance in balance_strategy(),
        amount in amount_strategy(),
    ) {
        let tx = ValidatedTransaction { kind: TransactionKind::Deposit, amount };
        let new_balance = LedgerEngine::post(balance, tx).unwrap();
        prop_assert_eq!(new_balance - balance, amount);
    }

    /// A withdrawal succeeds exactly when the balance covers it.
    #[test]
    fn prop_withdrawal_iff_covered(
        balance in balance_strategy(),
        amount in amount_strategy(),
    ) {
        let tx = ValidatedTransaction { kind: TransactionKind::Withdrawal, amount };
        let result = LedgerEngine::post(balance, tx);
        if balance >= amount {
            prop_assert_eq!(result.unwrap(), balance - amount);
        } else {
            prop_assert_eq!(result, Err(LedgerError::InsufficientFunds));
        }
    }

    /// A deposit followed by an equal withdrawal restores the balance.
    #[test]
    fn prop_deposit_withdraw_roundtrip(
        balance in balance_strategy(),
        amount in amount_strategy(),
    ) {
        let deposit = ValidatedTransaction { kind: TransactionKind::Deposit, amount };
        let withdrawal = ValidatedTransaction { kind: TransactionKind::Withdrawal, amount };

        let after_deposit = LedgerEngine::post(balance, deposit).unwrap();
        let after_withdrawal = LedgerEngine::post(after_deposit, withdrawal).unwrap();
        prop_assert_eq!(after_withdrawal, balance);
    }
}
