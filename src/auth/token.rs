use crate::types::{App, Claims, User};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

/// Errors produced by [`TokenIssuer`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The application has no usable signing secret.
    #[error("application signing secret is empty")]
    EmptySecret,

    /// Claim serialization or signing failed.
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Issues signed, time-bounded access tokens scoped to one application.
///
/// Tokens are HS256-signed with the application's own secret, so one
/// tenant's secret compromise or rotation never invalidates another
/// tenant's tokens, and a relying party only ever needs its own secret.
///
/// This is an issuance-only component: it never verifies tokens. Relying
/// parties verify signature and expiry themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenIssuer;

impl TokenIssuer {
    /// Signs a token for `user` scoped to `app`, valid for `ttl` from now.
    ///
    /// The claim set is fixed (see [`Claims`]); expiry is exactly
    /// issued-at + `ttl`. Signing is a pure CPU operation - there is no
    /// transient failure mode, so no retries.
    pub fn issue(&self, user: &User, app: &App, ttl: Duration) -> Result<String, TokenError> {
        if app.secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            app_id: app.id,
            iat,
            exp: iat + ttl.num_seconds(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(app.secret.as_bytes()),
        )
        .map_err(|e| TokenError::Signing(e.to_string()))
    }
}
