//! Configuration consumed by the core.
//!
//! The core only needs two knobs: the token time-to-live and the password
//! hashing work factor. Parsing config files or CLI flags is the embedding
//! process's job; this module just gives it a typed target plus an env-var
//! fallback for quick setups.

use serde::Deserialize;
use std::env;

/// Tunables consumed by [`AuthService`](crate::auth::service::AuthService)
/// and [`PasswordHasher`](crate::auth::password::PasswordHasher).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Token validity in seconds. Expiry is always issued-at plus this.
    pub token_ttl_secs: i64,
    /// Argon2 iteration count. Library default when unset.
    pub hash_work_factor: Option<u32>,
}

impl AuthConfig {
    /// Loads configuration from the environment.
    ///
    /// Reads `TOKEN_TTL_SECS` (default 3600) and `HASH_WORK_FACTOR`
    /// (unset means the Argon2 library default).
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(AuthConfig {
            token_ttl_secs: env::var("TOKEN_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()?,
            hash_work_factor: match env::var("HASH_WORK_FACTOR") {
                Ok(v) => Some(v.parse()?),
                Err(_) => None,
            },
        })
    }

    /// Token time-to-live as a duration.
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.token_ttl_secs)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_secs: 3600,
            hash_work_factor: None,
        }
    }
}
