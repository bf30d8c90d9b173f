//! Cached role resolution.

use std::sync::Arc;
use std::time::Duration;

use arca_core::access::AccountRole;
use arca_shared::config::RoleCacheConfig;
use arca_shared::types::{AccountId, UserId};
use arca_store::LedgerStore;

/// Resolves (user, account) to a membership role, with a small
/// read-through cache.
///
/// Role lookups are idempotent while memberships are unchanged, so they
/// are safe to cache per (user, account) key; the TTL bounds how long an
/// out-of-band grant or revocation takes to become visible here.
pub struct RoleResolver {
    store: Arc<LedgerStore>,
    cache: moka::sync::Cache<(UserId, AccountId), Option<AccountRole>>,
}

impl RoleResolver {
    /// Creates a resolver over the given store.
    #[must_use]
    pub fn new(store: Arc<LedgerStore>, config: &RoleCacheConfig) -> Self {
        let cache = moka::sync::Cache::builder()
            .max_capacity(config.capacity)
            .time_to_live(Duration::from_secs(config.ttl_secs))
            .build();
        Self { store, cache }
    }

    /// Returns the caller's role on the account, or `None` for no access.
    #[must_use]
    pub fn resolve(&self, user_id: UserId, account_id: AccountId) -> Option<AccountRole> {
        self.cache.get_with((user_id, account_id), || {
            self.store.resolve_role(user_id, account_id)
        })
    }

    /// Drops the cached entry for one (user, account) pair.
    pub fn invalidate(&self, user_id: UserId, account_id: AccountId) {
        self.cache.invalidate(&(user_id, account_id));
    }
}
