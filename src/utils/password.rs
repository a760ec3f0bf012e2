use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher, PasswordVerifier, phc::PasswordHash},
};

use crate::config::{HashAlgorithm, PasswordConfig};
use crate::error::HashError;

/// One-way hashing of local credentials.
///
/// Implementations are blocking; async callers run them on a blocking thread.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plaintext password with a fresh salt and the configured cost
    fn hash(&self, password: &str) -> Result<String, HashError>;

    /// Check a plaintext password against a stored hash in constant time
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, HashError>;
}

/// Hasher driven by [`PasswordConfig`].
///
/// New hashes use the configured algorithm. Verification recognizes both
/// Argon2 (`$argon2...`) and bcrypt (`$2a$`, `$2b$`, `$2x$`, `$2y$`) hashes so
/// accounts created under either setting keep working.
#[derive(Debug, Clone)]
pub struct ConfiguredHasher {
    config: PasswordConfig,
}

impl ConfiguredHasher {
    pub fn new(config: PasswordConfig) -> Self {
        Self { config }
    }

    fn argon2(&self) -> Result<Argon2<'static>, HashError> {
        let params = Params::new(
            self.config.argon2_memory_cost,
            self.config.argon2_time_cost,
            self.config.argon2_parallelism,
            None,
        )
        .map_err(|e| HashError::Argon2(e.to_string()))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

impl CredentialHasher for ConfiguredHasher {
    fn hash(&self, password: &str) -> Result<String, HashError> {
        match self.config.algorithm {
            HashAlgorithm::Argon2 => {
                let password_hash = self
                    .argon2()?
                    .hash_password(password.as_bytes())
                    .map_err(|e| HashError::Argon2(e.to_string()))?
                    .to_string();
                Ok(password_hash)
            }
            HashAlgorithm::Bcrypt => Ok(bcrypt::hash(password, self.config.bcrypt_cost)?),
        }
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, HashError> {
        if password_hash.starts_with("$argon2") {
            let parsed_hash =
                PasswordHash::new(password_hash).map_err(|e| HashError::Argon2(e.to_string()))?;
            // Parameters are read from the hash itself
            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok())
        } else if is_bcrypt_hash(password_hash) {
            Ok(bcrypt::verify(password, password_hash)?)
        } else {
            Err(HashError::UnknownFormat)
        }
    }
}

fn is_bcrypt_hash(value: &str) -> bool {
    ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| value.starts_with(prefix))
}
