//! Common types and error handling.
//!
//! Domain records exchanged with the storage collaborators, the claim set
//! encoded into issued tokens, and the stable error taxonomy exposed by
//! [`AuthService`](crate::auth::service::AuthService).

use serde::{Deserialize, Serialize};

// ============= Domain Records =============

/// A registered user account as stored by the user directory.
#[derive(Clone)]
pub struct User {
    /// Directory-assigned identifier, unique and immutable.
    pub id: i64,
    /// Login email, unique within the directory.
    pub email: String,
    /// PHC-formatted Argon2 password hash. Opaque outside the hasher.
    pub pass_hash: String,
}

// The password hash must never leak through logs or error output, so the
// Debug impl redacts it.
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("pass_hash", &"<redacted>")
            .finish()
    }
}

/// A calling application (tenant). Provisioned externally; read-only here.
#[derive(Clone)]
pub struct App {
    /// Externally assigned application identifier.
    pub id: i64,
    /// Human-readable application name.
    pub name: String,
    /// Symmetric signing secret for tokens scoped to this application.
    pub secret: String,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

// ============= Token Claims =============

/// The fixed claim set encoded into every issued token.
///
/// `exp` is always exactly `iat` plus the configured time-to-live. There are
/// no custom claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued for.
    pub sub: i64,
    /// User email at issuance time.
    pub email: String,
    /// Application (tenant) the token is scoped to.
    pub app_id: i64,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

// ============= Error Types =============

/// Stable error taxonomy returned by every `AuthService` operation.
///
/// Collaborator failures are recognized by category only and re-mapped to
/// these kinds at the call site; no backend detail crosses this boundary.
/// `Internal` is deliberately opaque - the originating failure is logged
/// with operation context before it is mapped.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately conflated so callers
    /// cannot probe which emails are registered.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The application id could not be resolved.
    #[error("invalid app id")]
    InvalidAppId,

    /// A user with this email is already registered.
    #[error("user already exists")]
    UserExists,

    /// The user id could not be resolved.
    #[error("user not found")]
    UserNotFound,

    /// Unexpected hashing, signing, or collaborator failure.
    #[error("internal error")]
    Internal,
}

/// Crate-wide result alias over [`AuthError`].
pub type Result<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_debug_redacts_hash() {
        let user = User {
            id: 7,
            email: "a@x.com".to_string(),
            pass_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
        };

        let rendered = format!("{:?}", user);
        assert!(!rendered.contains("argon2"), "hash must not appear in Debug");
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("a@x.com"));
    }

    #[test]
    fn test_app_debug_redacts_secret() {
        let app = App {
            id: 1,
            name: "web".to_string(),
            secret: "tenant-secret".to_string(),
        };

        let rendered = format!("{:?}", app);
        assert!(!rendered.contains("tenant-secret"));
        assert!(rendered.contains("web"));
    }
}
