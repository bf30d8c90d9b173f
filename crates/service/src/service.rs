//! The account service: the full request pipeline per operation.
//!
//! Each method runs the same shape: resolve the caller's role, pass the
//! capability gate, then do the work. Authorization always comes first, so
//! a denied caller learns nothing from validation messages, and the
//! unknown-account case folds into the same denial.

use std::sync::Arc;

use arca_core::access::{authorize, Operation};
use arca_core::ledger::{self, LedgerEngine, TransactionDraft, TransactionRecord};
use arca_core::reports::{ActivityReport, DateRange, ReportService};
use arca_shared::auth::Principal;
use arca_shared::config::AppConfig;
use arca_shared::error::{AppError, AppResult};
use arca_shared::types::{AccountId, Money, TransactionId, UserId};
use arca_store::LedgerStore;

use crate::errors;
use crate::resolver::RoleResolver;

/// Orchestrates transaction and report requests against one store.
pub struct AccountService {
    store: Arc<LedgerStore>,
    resolver: RoleResolver,
}

impl AccountService {
    /// Wires the service over a store, with role caching per `config`.
    #[must_use]
    pub fn new(store: Arc<LedgerStore>, config: &AppConfig) -> Self {
        let resolver = RoleResolver::new(Arc::clone(&store), &config.role_cache);
        Self { store, resolver }
    }

    /// Lists transactions on an account visible to the caller.
    ///
    /// Regular members see only their own postings; staff who also hold a
    /// readable role see every user's postings on the account. Staff status
    /// alone does not open the list.
    #[tracing::instrument(skip(self), fields(user_id = %principal.user_id))]
    pub async fn list_transactions(
        &self,
        principal: Principal,
        account_id: AccountId,
    ) -> AppResult<Vec<TransactionRecord>> {
        self.authorize(principal.user_id, account_id, Operation::Read)?;

        let records = if principal.is_staff {
            self.store
                .transactions_for_account(account_id)
                .map_err(errors::from_store)?
        } else {
            self.store
                .transactions_for_account_by_user(account_id, principal.user_id)
                .map_err(errors::from_store)?
        };
        Ok(records)
    }

    /// Retrieves one transaction on an account.
    #[tracing::instrument(skip(self), fields(user_id = %principal.user_id))]
    pub async fn get_transaction(
        &self,
        principal: Principal,
        account_id: AccountId,
        transaction_id: TransactionId,
    ) -> AppResult<TransactionRecord> {
        self.authorize(principal.user_id, account_id, Operation::Read)?;

        self.store
            .transaction(account_id, transaction_id)
            .map_err(errors::from_store)?
            .ok_or_else(|| AppError::NotFound(format!("transaction {transaction_id}")))
    }

    /// Validates and commits a new transaction, returning the record.
    ///
    /// Validation runs against the balance observed here; the store
    /// re-checks under the account lock, so a concurrent withdrawal that
    /// wins the race surfaces as [`AppError::InsufficientFunds`] instead of
    /// a negative balance.
    #[tracing::instrument(skip(self, draft), fields(user_id = %principal.user_id))]
    pub async fn create_transaction(
        &self,
        principal: Principal,
        account_id: AccountId,
        draft: TransactionDraft,
    ) -> AppResult<TransactionRecord> {
        self.authorize(principal.user_id, account_id, Operation::Create)?;

        let balance = self
            .store
            .balance(account_id)
            .await
            .map_err(errors::from_store)?;
        let validated =
            ledger::validate(&draft, balance).map_err(|e| errors::from_validation(&e))?;

        let record = self
            .store
            .record_transaction(account_id, principal.user_id, validated)
            .await
            .map_err(errors::from_store)?;

        tracing::info!(
            transaction_id = %record.id,
            account_id = %account_id,
            kind = %record.kind,
            amount = %record.amount,
            "transaction created"
        );
        Ok(record)
    }

    /// Attempts to update a settled transaction.
    ///
    /// Passing the gate requires a mutating role; the ledger then refuses
    /// the edit, because settled records are final. The refusal happens
    /// after authorization so it is only ever seen by callers entitled to
    /// try.
    #[tracing::instrument(skip(self), fields(user_id = %principal.user_id))]
    pub async fn update_transaction(
        &self,
        principal: Principal,
        account_id: AccountId,
        transaction_id: TransactionId,
    ) -> AppResult<()> {
        self.authorize(principal.user_id, account_id, Operation::Update)?;
        let record = self.fetch(account_id, transaction_id)?;
        LedgerEngine::validate_can_mutate(&record).map_err(errors::from_ledger)
    }

    /// Attempts to delete a settled transaction. Same outcome as update:
    /// authorized callers get the business-rule refusal.
    #[tracing::instrument(skip(self), fields(user_id = %principal.user_id))]
    pub async fn delete_transaction(
        &self,
        principal: Principal,
        account_id: AccountId,
        transaction_id: TransactionId,
    ) -> AppResult<()> {
        self.authorize(principal.user_id, account_id, Operation::Delete)?;
        let record = self.fetch(account_id, transaction_id)?;
        LedgerEngine::validate_can_mutate(&record).map_err(errors::from_ledger)
    }

    /// Builds the staff-only activity report for one user.
    ///
    /// Filters the full log by the target user and the inclusive date
    /// range; the total is the signed sum over the rows. An empty window is
    /// an empty report, not an error.
    #[tracing::instrument(skip(self), fields(staff_id = %principal.user_id))]
    pub async fn admin_report(
        &self,
        principal: Principal,
        target_user: UserId,
        range: DateRange,
    ) -> AppResult<ActivityReport> {
        principal.require_staff()?;

        let records = self.store.transaction_log().map_err(errors::from_store)?;
        let names = self.store.account_names().await;
        let report = ReportService::user_activity(target_user, range, &records, |account_id| {
            names.get(&account_id).cloned().unwrap_or_default()
        });

        tracing::info!(
            target_user = %target_user,
            rows = report.transactions.len(),
            total = %report.total_balance,
            "admin report generated"
        );
        Ok(report)
    }

    /// Returns the account balance for a caller with read access.
    #[tracing::instrument(skip(self), fields(user_id = %principal.user_id))]
    pub async fn balance(
        &self,
        principal: Principal,
        account_id: AccountId,
    ) -> AppResult<Money> {
        self.authorize(principal.user_id, account_id, Operation::Read)?;
        self.store.balance(account_id).await.map_err(errors::from_store)
    }

    /// Exposes the resolver so membership changes can invalidate the cache.
    #[must_use]
    pub const fn resolver(&self) -> &RoleResolver {
        &self.resolver
    }

    fn authorize(
        &self,
        user_id: UserId,
        account_id: AccountId,
        operation: Operation,
    ) -> AppResult<()> {
        let role = self.resolver.resolve(user_id, account_id);
        authorize(role, operation).map_err(errors::from_access)
    }

    fn fetch(
        &self,
        account_id: AccountId,
        transaction_id: TransactionId,
    ) -> AppResult<TransactionRecord> {
        self.store
            .transaction(account_id, transaction_id)
            .map_err(errors::from_store)?
            .ok_or_else(|| AppError::NotFound(format!("transaction {transaction_id}")))
    }
}
