//! In-memory storage layer for Arca.
//!
//! Durable storage belongs to the embedding application; this crate is
//! the reference storage layer behind the same contract. It owns
//! the account, membership, and transaction-log state, and provides the one
//! operation that must be atomic: committing a transaction's balance effect
//! together with its log append under exclusive per-account access.

pub mod error;
pub mod records;
pub mod store;

pub use error::StoreError;
pub use records::AccountRecord;
pub use store::LedgerStore;
