//! Transaction validation and balance posting.
//!
//! This module implements the ledger core:
//! - Domain types for transaction requests and records
//! - Payload validation (ordered rules, first failure wins)
//! - The posting engine that computes balance effects
//! - Error types for ledger operations
//!
//! The engine is pure arithmetic; atomicity (exclusive access to one
//! account's balance for the read-modify-write) is the storage layer's job.

pub mod engine;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod engine_props;

pub use engine::LedgerEngine;
pub use error::{LedgerError, ValidationError};
pub use types::{TransactionDraft, TransactionKind, TransactionRecord, ValidatedTransaction};
pub use validation::validate;
