//! Storage collaborator contracts.
//!
//! The core never talks to a concrete database. It depends on the narrow
//! capability traits below, implemented by whatever storage layer embeds the
//! crate (SQL, KV, an in-memory fake in tests). Each trait carries exactly
//! the capability one operation needs, so tests can substitute them
//! independently.
//!
//! # Example
//!
//! ```rust,ignore
//! use signet::store::{AppProvider, UserProvider, UserSaver};
//!
//! struct SqliteStore { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl UserSaver for SqliteStore {
//!     async fn save_user(&self, email: &str, pass_hash: &str) -> Result<i64, StoreError> {
//!         // INSERT ... ON CONFLICT -> StoreError::AlreadyExists
//!     }
//! }
//! ```

use crate::types::{App, User};
use async_trait::async_trait;

/// Failure categories a storage collaborator may report.
///
/// The core inspects only the category. Backend-specific detail stays inside
/// `Backend` and is logged server-side, never surfaced to callers.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record with the same unique key already exists.
    #[error("record already exists")]
    AlreadyExists,

    /// No record matched the lookup key.
    #[error("record not found")]
    NotFound,

    /// Any other backend failure (connection loss, corruption, timeout).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Write capability: create a user record if the email is not taken.
#[async_trait]
pub trait UserSaver: Send + Sync {
    /// Persists a new user and returns the directory-assigned id.
    ///
    /// Must return [`StoreError::AlreadyExists`] when a user with this email
    /// is already registered, without modifying the existing record.
    async fn save_user(&self, email: &str, pass_hash: &str) -> Result<i64, StoreError>;
}

/// Read capability over user records.
#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Looks up a user by email.
    async fn user_by_email(&self, email: &str) -> Result<User, StoreError>;

    /// Returns the stored admin flag for a user id.
    async fn is_admin(&self, user_id: i64) -> Result<bool, StoreError>;
}

/// Read capability over provisioned applications (tenants).
#[async_trait]
pub trait AppProvider: Send + Sync {
    /// Resolves an application and its signing secret by id.
    async fn app_by_id(&self, app_id: i64) -> Result<App, StoreError>;
}
