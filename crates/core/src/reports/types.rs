//! Report data types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use arca_shared::types::{AccountId, Money, TransactionId, UserId};

use crate::ledger::TransactionKind;

/// An inclusive calendar-date range.
///
/// Bounds apply at date granularity, not time-of-day; either side may be
/// open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive lower bound.
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// A range with no bounds: contains every date.
    pub const UNBOUNDED: Self = Self {
        start: None,
        end: None,
    };

    /// Creates a range from optional bounds.
    #[must_use]
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Returns true if `date` falls within the range, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

/// One transaction row in an activity report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// The transaction.
    pub id: TransactionId,
    /// The account it was posted to.
    pub account_id: AccountId,
    /// The account's display name at report time.
    pub account_name: String,
    /// Deposit or withdrawal.
    pub kind: TransactionKind,
    /// The (unsigned) transaction amount.
    pub amount: Money,
    /// When the transaction was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// A user's filtered activity with a derived net total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityReport {
    /// The user the report covers.
    pub user_id: UserId,
    /// Signed sum over the filtered set: deposits add, withdrawals
    /// subtract. Derived from the rows, never re-read from account
    /// balances, so it reconstructs net activity even when accounts have
    /// since moved on.
    pub total_balance: Money,
    /// The filtered transactions, oldest first.
    pub transactions: Vec<ReportEntry>,
}
