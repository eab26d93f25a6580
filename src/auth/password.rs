use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2, Params,
};

/// Errors produced by [`PasswordHasher`].
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// Hashing itself failed (e.g. the OS could not supply randomness).
    #[error("failed to hash password: {0}")]
    Hash(String),

    /// The stored hash is not a valid PHC string (truncated or corrupt).
    /// This is a storage problem, never a wrong password.
    #[error("invalid password hash: {0}")]
    InvalidHash(String),

    /// The requested work factor is outside the range Argon2 accepts.
    #[error("invalid hashing parameters: {0}")]
    Params(String),
}

/// Password hashing and verification using Argon2id.
///
/// Stateless and cheap to clone; the expensive part is each `hash`/`verify`
/// call itself. The work factor is the Argon2 iteration count - raising it
/// slows brute-force attacks and every legitimate call equally, so callers
/// under high concurrency should bound how many hashes run at once.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Creates a hasher with the given work factor (Argon2 iterations).
    ///
    /// Memory and parallelism stay at the library defaults. Returns an error
    /// rather than panicking when the factor is out of range, so the
    /// composition root can decide what to do.
    pub fn new(work_factor: u32) -> Result<Self, HashError> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            work_factor,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| HashError::Params(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
        })
    }

    /// Hashes a password with a fresh random salt.
    ///
    /// Returns a PHC-formatted string. Two calls with the same password
    /// produce different strings; only [`verify`](Self::verify) can compare.
    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashError::Hash(e.to_string()))
    }

    /// Verifies a password against a stored PHC hash.
    ///
    /// A mismatch is `Ok(false)`, not an error. An error means the stored
    /// hash itself is unusable and the caller should treat it as an internal
    /// failure.
    pub fn verify(&self, stored_hash: &str, password: &str) -> Result<bool, HashError> {
        let parsed_hash =
            PasswordHash::new(stored_hash).map_err(|e| HashError::InvalidHash(e.to_string()))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HashError::InvalidHash(e.to_string())),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}
