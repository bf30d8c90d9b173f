//! Account-scoped access control.
//!
//! Every operation on an account is gated by the caller's membership role.
//! Policy is a static capability table checked by a pure function: no
//! runtime class selection, no IO. Role lookup (the membership read) is a
//! separate concern so the policy stays independently testable and the
//! lookup can be cached or batched later.

pub mod error;
pub mod gate;
pub mod membership;
pub mod role;

#[cfg(test)]
mod gate_props;

pub use error::AccessError;
pub use gate::{Operation, allows, authorize};
pub use membership::Membership;
pub use role::AccountRole;
