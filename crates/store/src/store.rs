//! The ledger store: accounts, memberships, and the transaction log.
//!
//! Locking model: every account carries its own `tokio::sync::Mutex`, so
//! commits against different accounts never block one another while commits
//! against the same account serialize for the duration of the
//! read-modify-write. The log append happens with both the account guard
//! and the log write guard held, and with no await points in between, so an
//! abandoned request can never leave a half-applied commit.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;

use arca_core::access::{AccountRole, Membership};
use arca_core::ledger::{LedgerEngine, TransactionRecord, ValidatedTransaction};
use arca_shared::types::{AccountId, Money, TransactionId, UserId};

use crate::error::StoreError;
use crate::records::AccountRecord;

/// In-memory ledger state.
#[derive(Debug, Default)]
pub struct LedgerStore {
    accounts: DashMap<AccountId, Arc<Mutex<AccountRecord>>>,
    memberships: DashMap<(UserId, AccountId), AccountRole>,
    log: RwLock<Vec<TransactionRecord>>,
}

impl LedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Opens a new account with a display name and opening balance.
    pub fn create_account(
        &self,
        name: impl Into<String>,
        opening_balance: Money,
    ) -> Result<AccountId, StoreError> {
        if opening_balance.is_negative() {
            return Err(StoreError::NegativeOpeningBalance);
        }

        let id = AccountId::new();
        let record = AccountRecord::new(id, name.into(), opening_balance);
        self.accounts.insert(id, Arc::new(Mutex::new(record)));
        Ok(id)
    }

    /// Returns the account's current balance.
    pub async fn balance(&self, account_id: AccountId) -> Result<Money, StoreError> {
        let cell = self.account_cell(account_id)?;
        let account = cell.lock().await;
        Ok(account.balance)
    }

    /// Returns the account's display name.
    pub async fn account_name(&self, account_id: AccountId) -> Result<String, StoreError> {
        let cell = self.account_cell(account_id)?;
        let account = cell.lock().await;
        Ok(account.name.clone())
    }

    /// Returns a snapshot of every account's display name.
    ///
    /// The reporting path uses this to label rows without re-locking per
    /// row.
    pub async fn account_names(&self) -> std::collections::HashMap<AccountId, String> {
        let mut names = std::collections::HashMap::with_capacity(self.accounts.len());
        let cells: Vec<Arc<Mutex<AccountRecord>>> = self
            .accounts
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        for cell in cells {
            let account = cell.lock().await;
            names.insert(account.id, account.name.clone());
        }
        names
    }

    fn account_cell(&self, account_id: AccountId) -> Result<Arc<Mutex<AccountRecord>>, StoreError> {
        self.accounts
            .get(&account_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(StoreError::AccountNotFound(account_id))
    }

    // ========================================================================
    // Memberships
    // ========================================================================

    /// Grants `role` to `user` on `account`, replacing any previous grant.
    ///
    /// Upsert semantics preserve the invariant of at most one membership
    /// per (user, account) pair. Administered by the external admin
    /// workflow and tests; the request path only ever reads.
    pub fn grant(
        &self,
        user_id: UserId,
        account_id: AccountId,
        role: AccountRole,
    ) -> Result<(), StoreError> {
        if !self.accounts.contains_key(&account_id) {
            return Err(StoreError::AccountNotFound(account_id));
        }
        self.memberships.insert((user_id, account_id), role);
        Ok(())
    }

    /// Removes `user`'s membership on `account`, if any.
    pub fn revoke(&self, user_id: UserId, account_id: AccountId) {
        self.memberships.remove(&(user_id, account_id));
    }

    /// Looks up the unique membership for (user, account).
    ///
    /// Absence is `None` (no access), never an error. Pure read.
    #[must_use]
    pub fn resolve_role(&self, user_id: UserId, account_id: AccountId) -> Option<AccountRole> {
        self.memberships
            .get(&(user_id, account_id))
            .map(|entry| *entry.value())
    }

    /// Lists one user's grants across all accounts, for the admin
    /// workflow.
    #[must_use]
    pub fn memberships_for_user(&self, user_id: UserId) -> Vec<Membership> {
        self.memberships
            .iter()
            .filter(|entry| entry.key().0 == user_id)
            .map(|entry| Membership::new(entry.key().0, entry.key().1, *entry.value()))
            .collect()
    }

    // ========================================================================
    // Transaction log
    // ========================================================================

    /// Commits a validated transaction with a server-assigned timestamp.
    pub async fn record_transaction(
        &self,
        account_id: AccountId,
        user_id: UserId,
        transaction: ValidatedTransaction,
    ) -> Result<TransactionRecord, StoreError> {
        self.record_transaction_at(account_id, user_id, transaction, Utc::now())
            .await
    }

    /// Commits a validated transaction with an explicit timestamp
    /// (admin/test tooling only).
    ///
    /// The commit is a single atomic unit: the balance is re-checked and
    /// mutated and the record appended under the account's exclusive lock,
    /// or nothing happens at all.
    pub async fn record_transaction_at(
        &self,
        account_id: AccountId,
        user_id: UserId,
        transaction: ValidatedTransaction,
        recorded_at: DateTime<Utc>,
    ) -> Result<TransactionRecord, StoreError> {
        let cell = self.account_cell(account_id)?;
        let mut account = cell.lock().await;

        // Commit-time re-check: the balance may have moved since this
        // request validated.
        let new_balance = LedgerEngine::post(account.balance, transaction)?;

        let record =
            TransactionRecord::backdated(account_id, user_id, transaction, recorded_at);

        // Take the log guard before touching the balance; past this point
        // both mutations happen or neither does.
        let mut log = self.log.write().map_err(|_| StoreError::LogPoisoned)?;
        account.balance = new_balance;
        log.push(record.clone());

        tracing::debug!(
            account_id = %account_id,
            transaction_id = %record.id,
            kind = %record.kind,
            amount = %record.amount,
            balance = %new_balance,
            "transaction committed"
        );

        Ok(record)
    }

    /// Returns all transactions on an account, in commit order.
    pub fn transactions_for_account(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<TransactionRecord>, StoreError> {
        let log = self.log.read().map_err(|_| StoreError::LogPoisoned)?;
        Ok(log
            .iter()
            .filter(|record| record.account_id == account_id)
            .cloned()
            .collect())
    }

    /// Returns one user's transactions on an account, in commit order.
    pub fn transactions_for_account_by_user(
        &self,
        account_id: AccountId,
        user_id: UserId,
    ) -> Result<Vec<TransactionRecord>, StoreError> {
        let log = self.log.read().map_err(|_| StoreError::LogPoisoned)?;
        Ok(log
            .iter()
            .filter(|record| record.account_id == account_id && record.user_id == user_id)
            .cloned()
            .collect())
    }

    /// Looks up a transaction scoped to an account.
    ///
    /// A transaction on a different account is `None` here: callers only
    /// ever hold access to one account at a time.
    pub fn transaction(
        &self,
        account_id: AccountId,
        transaction_id: TransactionId,
    ) -> Result<Option<TransactionRecord>, StoreError> {
        let log = self.log.read().map_err(|_| StoreError::LogPoisoned)?;
        Ok(log
            .iter()
            .find(|record| record.id == transaction_id && record.account_id == account_id)
            .cloned())
    }

    /// Returns a snapshot of the full transaction log, in commit order.
    ///
    /// The reporting path consumes this; filtering happens in core.
    pub fn transaction_log(&self) -> Result<Vec<TransactionRecord>, StoreError> {
        let log = self.log.read().map_err(|_| StoreError::LogPoisoned)?;
        Ok(log.clone())
    }
}
