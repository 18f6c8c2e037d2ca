//! # Infrastructure Layer
//!
//! Concrete implementations of the AskBoard stores: MySQL (via SQLx) for
//! users, refresh tokens, and inquiries; Redis for the token blacklist,
//! whose entries expire natively via TTL.

use thiserror::Error;

pub mod cache;
pub mod database;

/// Errors raised while constructing infrastructure components.
///
/// Runtime store failures are mapped into `ab_core::DomainError::Storage`
/// at the repository boundary; this type covers startup wiring only.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Configuration error: {0}")]
    Config(String),
}
