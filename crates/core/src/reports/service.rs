//! Report generation service.

use arca_shared::types::{AccountId, Money, UserId};

use crate::ledger::TransactionRecord;

use super::types::{ActivityReport, DateRange, ReportEntry};

/// Service for generating user activity reports.
///
/// Pure: operates on transaction records the caller already collected and a
/// name-lookup seam, with no storage dependencies.
pub struct ReportService;

impl ReportService {
    /// Builds the activity report for one user over the full transaction
    /// log.
    ///
    /// Rows are filtered by acting user (not by account membership) and by
    /// the inclusive date range at calendar-date granularity. The total is
    /// the signed sum over the filtered set. An empty selection yields an
    /// empty report with a zero total; that is a result, not an error.
    #[must_use]
    pub fn user_activity<F>(
        user_id: UserId,
        range: DateRange,
        records: &[TransactionRecord],
        account_name: F,
    ) -> ActivityReport
    where
        F: Fn(AccountId) -> String,
    {
        let selected: Vec<&TransactionRecord> = records
            .iter()
            .filter(|record| record.user_id == user_id)
            .filter(|record| range.contains(record.recorded_at.date_naive()))
            .collect();

        let total_balance: Money = selected.iter().map(|record| record.signed_amount()).sum();

        let transactions: Vec<ReportEntry> = selected
            .into_iter()
            .map(|record| ReportEntry {
                id: record.id,
                account_id: record.account_id,
                account_name: account_name(record.account_id),
                kind: record.kind,
                amount: record.amount,
                recorded_at: record.recorded_at,
            })
            .collect();

        ActivityReport {
            user_id,
            total_balance,
            transactions,
        }
    }
}
