use crate::auth::password::PasswordHasher;
use crate::auth::token::TokenIssuer;
use crate::store::{AppProvider, StoreError, UserProvider, UserSaver};
use crate::types::{AuthError, Result};
use chrono::Duration;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Orchestrates registration, login, and admin lookup.
///
/// Composes the password hasher, the token issuer, and the storage
/// collaborator traits. Holds no mutable state: every operation is a single
/// linear pipeline with early-exit error branches, safe to call concurrently
/// from any number of tasks.
///
/// Collaborator failures never cross this boundary raw - each call site maps
/// them to the [`AuthError`] taxonomy and logs the original failure with
/// operation context.
pub struct AuthService {
    users: Arc<dyn UserSaver>,
    user_provider: Arc<dyn UserProvider>,
    apps: Arc<dyn AppProvider>,
    hasher: PasswordHasher,
    issuer: TokenIssuer,
    token_ttl: Duration,
}

impl AuthService {
    /// Creates the service from its collaborators and the configured token
    /// time-to-live.
    pub fn new(
        users: Arc<dyn UserSaver>,
        user_provider: Arc<dyn UserProvider>,
        apps: Arc<dyn AppProvider>,
        hasher: PasswordHasher,
        token_ttl: Duration,
    ) -> Self {
        Self {
            users,
            user_provider,
            apps,
            hasher,
            issuer: TokenIssuer,
            token_ttl,
        }
    }

    /// Registers a new user and returns the directory-assigned id.
    ///
    /// Registering the same email twice fails with
    /// [`AuthError::UserExists`] on the second call; the existing record is
    /// untouched. No format validation happens here - that belongs to the
    /// transport layer.
    #[instrument(name = "auth.register", skip_all)]
    pub async fn register(&self, email: &str, password: &str) -> Result<i64> {
        info!("registering new user");

        let pass_hash = self.hasher.hash(password).map_err(|e| {
            error!(cause = %e, "failed to hash password");
            AuthError::Internal
        })?;

        let id = match self.users.save_user(email, &pass_hash).await {
            Ok(id) => id,
            Err(StoreError::AlreadyExists) => {
                warn!("user already exists");
                return Err(AuthError::UserExists);
            }
            Err(e) => {
                error!(cause = %e, "failed to save user");
                return Err(AuthError::Internal);
            }
        };

        info!(user_id = id, "user registered");

        Ok(id)
    }

    /// Verifies credentials and issues a token scoped to `app_id`.
    ///
    /// Unknown email and wrong password both return
    /// [`AuthError::InvalidCredentials`] so a caller cannot probe which
    /// emails are registered. The pipeline order is fixed: user lookup,
    /// password check, application lookup, signing.
    #[instrument(name = "auth.login", skip(self, email, password))]
    pub async fn login(&self, email: &str, password: &str, app_id: i64) -> Result<String> {
        info!("logging in");

        let user = match self.user_provider.user_by_email(email).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                warn!("user not found");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                error!(cause = %e, "failed to get user");
                return Err(AuthError::Internal);
            }
        };

        let matched = self.hasher.verify(&user.pass_hash, password).map_err(|e| {
            // Corrupt stored hash, not a wrong password.
            error!(cause = %e, "failed to verify password");
            AuthError::Internal
        })?;
        if !matched {
            warn!("invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let app = match self.apps.app_by_id(app_id).await {
            Ok(app) => app,
            Err(StoreError::NotFound) => {
                warn!("app not found");
                return Err(AuthError::InvalidAppId);
            }
            Err(e) => {
                error!(cause = %e, "failed to get app");
                return Err(AuthError::Internal);
            }
        };

        let token = self.issuer.issue(&user, &app, self.token_ttl).map_err(|e| {
            error!(cause = %e, "failed to create token");
            AuthError::Internal
        })?;

        info!(user_id = user.id, "user logged in");

        Ok(token)
    }

    /// Returns the stored admin flag for a user, verbatim.
    #[instrument(name = "auth.is_admin", skip(self))]
    pub async fn is_admin(&self, user_id: i64) -> Result<bool> {
        info!("checking if user is admin");

        let is_admin = match self.user_provider.is_admin(user_id).await {
            Ok(flag) => flag,
            Err(StoreError::NotFound) => {
                warn!("user not found");
                return Err(AuthError::UserNotFound);
            }
            Err(e) => {
                error!(cause = %e, "failed to check if user is admin");
                return Err(AuthError::Internal);
            }
        };

        info!(is_admin, "admin flag resolved");

        Ok(is_admin)
    }
}
