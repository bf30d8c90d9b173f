//! The (user, account, role) grant record.

use serde::{Deserialize, Serialize};

use arca_shared::types::{AccountId, UserId};

use super::role::AccountRole;

/// A user's membership in an account.
///
/// Invariant: at most one membership exists per (user, account) pair; a
/// user holds exactly one role per account. Memberships are created and
/// removed by an external admin workflow and are read-only to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// The member.
    pub user_id: UserId,
    /// The account the grant applies to.
    pub account_id: AccountId,
    /// The granted role.
    pub role: AccountRole,
}

impl Membership {
    /// Creates a membership grant.
    #[must_use]
    pub const fn new(user_id: UserId, account_id: AccountId, role: AccountRole) -> Self {
        Self {
            user_id,
            account_id,
            role,
        }
    }
}
