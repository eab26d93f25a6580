//! Authentication business logic.
//!
//! # Module Structure
//!
//! - [`auth::password`](crate::auth::password) - Argon2id password hashing and verification
//! - [`auth::token`](crate::auth::token) - per-application HS256 token issuance
//! - [`auth::service`](crate::auth::service) - orchestration of the three operations
//!
//! # Security Features
//!
//! - **Password Hashing**: Argon2id (memory-hard) with a tunable work factor
//! - **Tenant-scoped Tokens**: HS256 tokens signed with each application's
//!   own secret, so one tenant's key rotation never touches another's tokens
//! - **Anti-enumeration**: unknown email and wrong password are the same
//!   error kind at login
//!
//! # Usage
//!
//! ```ignore
//! use signet::auth::{password::PasswordHasher, service::AuthService};
//! use std::sync::Arc;
//!
//! let hasher = PasswordHasher::new(config.hash_work_factor())?;
//! let service = AuthService::new(store.clone(), store.clone(), store, hasher, config.token_ttl());
//!
//! let user_id = service.register("a@x.com", "secret").await?;
//! let token = service.login("a@x.com", "secret", app_id).await?;
//! ```

/// Password hashing and verification.
pub mod password;
/// AuthService orchestration of register/login/is_admin.
pub mod service;
/// Signed token issuance.
pub mod token;
