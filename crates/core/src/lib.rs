//! Core business logic for Arca.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, authorization policy, validation rules,
//! and balance arithmetic live here.
//!
//! # Modules
//!
//! - `access` - Account-scoped roles and the capability gate
//! - `ledger` - Transaction validation and balance posting
//! - `reports` - User activity aggregation (admin-only path)

pub mod access;
pub mod ledger;
pub mod reports;
