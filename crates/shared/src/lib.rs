//! Shared types, errors, and configuration for Arca.
//!
//! This crate provides common types used across all other crates:
//! - Fixed-point money amounts
//! - Typed IDs for type-safe entity references
//! - The authenticated principal handed over by the embedding application
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod types;

pub use auth::Principal;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
