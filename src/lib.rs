//! # Signet - credential verification and token issuance core
//!
//! A multi-tenant authentication core: it registers user accounts, verifies
//! login credentials, and mints HS256-signed access tokens scoped to a
//! calling application (tenant). Transport and storage stay outside - the
//! crate exposes plain async operations and depends on narrow storage
//! traits, so it can sit behind gRPC, HTTP, or a test harness unchanged.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use signet::{AuthConfig, AuthService, PasswordHasher};
//! use std::sync::Arc;
//!
//! let config = AuthConfig::from_env()?;
//! let hasher = match config.hash_work_factor {
//!     Some(factor) => PasswordHasher::new(factor)?,
//!     None => PasswordHasher::default(),
//! };
//!
//! // `store` implements UserSaver + UserProvider + AppProvider.
//! let service = AuthService::new(
//!     store.clone(),
//!     store.clone(),
//!     store,
//!     hasher,
//!     config.token_ttl(),
//! );
//!
//! let user_id = service.register("a@x.com", "hunter22").await?;
//! let token = service.login("a@x.com", "hunter22", app_id).await?;
//! let is_admin = service.is_admin(user_id).await?;
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - password hashing, token issuance, and orchestration
//! - [`store`] - storage collaborator contracts
//! - [`types`] - domain records, claims, and the error taxonomy
//! - [`config`] - the two tunables the core consumes
//!
//! ## Error taxonomy
//!
//! Every operation returns [`AuthError`] kinds only: `InvalidCredentials`,
//! `InvalidAppId`, `UserExists`, `UserNotFound`, or an opaque `Internal`.
//! Backend detail is logged server-side and never crosses the boundary.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Authentication business logic.
pub mod auth;
/// Configuration consumed by the core.
pub mod config;
/// Storage collaborator contracts.
pub mod store;
/// Common types and error handling.
pub mod types;

pub use auth::password::PasswordHasher;
pub use auth::service::AuthService;
pub use auth::token::TokenIssuer;
pub use config::AuthConfig;
pub use store::{AppProvider, StoreError, UserProvider, UserSaver};
pub use types::{App, AuthError, Claims, Result, User};
