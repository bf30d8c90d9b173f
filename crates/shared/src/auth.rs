//! The authenticated principal.
//!
//! Authentication (credential checks, token issuance and refresh) happens in
//! the embedding application; the ledger core only ever sees the result: a
//! user identity plus a platform-wide staff flag. Account-scoped roles are a
//! separate concept resolved per (user, account) by the access module.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::types::UserId;

/// An authenticated caller as handed over by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The authenticated user.
    pub user_id: UserId,
    /// Platform-wide staff flag. Grants the admin report path only; it does
    /// NOT grant any account-scoped role.
    pub is_staff: bool,
}

impl Principal {
    /// Creates a regular (non-staff) principal.
    #[must_use]
    pub const fn user(user_id: UserId) -> Self {
        Self {
            user_id,
            is_staff: false,
        }
    }

    /// Creates a staff principal.
    #[must_use]
    pub const fn staff(user_id: UserId) -> Self {
        Self {
            user_id,
            is_staff: true,
        }
    }

    /// Gate for staff-only operations (the admin report path).
    pub fn require_staff(&self) -> AppResult<()> {
        if self.is_staff {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}
