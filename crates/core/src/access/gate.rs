//! The authorization gate: a static capability table.
//!
//! | role | read | create | update/delete |
//! |------|------|--------|---------------|
//! | view | yes  | no     | no            |
//! | crud | yes  | yes    | yes           |
//! | post | no   | yes    | no            |
//! | none | no   | no     | no            |
//!
//! The table is exact, not inferred from a hierarchy. Staff status plays no
//! part here: platform staff get a separate gate on the admin report path
//! and a widened read filter on list, never a role they were not granted.

use super::error::AccessError;
use super::role::AccountRole;

/// An operation on an account's transaction log, as seen by the gate.
///
/// `Read` covers list and retrieve; the write side is split because the
/// capability table distinguishes creation from mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// List or retrieve transactions.
    Read,
    /// Record a new transaction.
    Create,
    /// Modify an existing transaction.
    Update,
    /// Remove an existing transaction.
    Delete,
}

/// Returns true if `role` permits `operation` per the capability table.
#[must_use]
pub const fn allows(role: AccountRole, operation: Operation) -> bool {
    match operation {
        Operation::Read => role.can_read(),
        Operation::Create => role.can_create(),
        Operation::Update | Operation::Delete => role.can_mutate(),
    }
}

/// Authorizes an operation for a resolved role.
///
/// `None` means the caller has no membership on the account; that is an
/// ordinary denial, not an error about the membership's absence.
pub const fn authorize(
    role: Option<AccountRole>,
    operation: Operation,
) -> Result<(), AccessError> {
    match role {
        Some(role) if allows(role, operation) => Ok(()),
        _ => Err(AccessError::Denied),
    }
}
