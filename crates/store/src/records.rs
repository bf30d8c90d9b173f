//! Stored entity records.

use arca_shared::types::{AccountId, Money};

/// An investment account as held by the store.
///
/// Invariant: `balance` never goes negative. Only the commit path mutates
/// it, under the account's exclusive lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    /// Account identity.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Current balance.
    pub balance: Money,
}

impl AccountRecord {
    /// Creates an account record with an opening balance.
    #[must_use]
    pub fn new(id: AccountId, name: String, balance: Money) -> Self {
        Self { id, name, balance }
    }
}
