//! Request-level orchestration of the Arca ledger core.
//!
//! This crate is what the embedding application wires its transport to: it
//! consumes an authenticated [`Principal`](arca_shared::Principal) plus a
//! raw payload and runs the full pipeline — role resolution, the capability
//! gate, payload validation, the atomic commit — returning typed results
//! and nothing else. The admin report path lives here too, behind its own
//! staff-only gate.

pub mod errors;
pub mod resolver;
pub mod service;

pub use resolver::RoleResolver;
pub use service::AccountService;
