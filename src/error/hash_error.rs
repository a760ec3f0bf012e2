use thiserror::Error;

/// Errors raised while hashing or verifying a password.
#[derive(Error, Debug)]
pub enum HashError {
    #[error("argon2: {0}")]
    Argon2(String),

    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("unrecognized password hash format")]
    UnknownFormat,

    #[error("hashing task failed: {0}")]
    Worker(String),
}

impl From<tokio::task::JoinError> for HashError {
    fn from(error: tokio::task::JoinError) -> Self {
        HashError::Worker(error.to_string())
    }
}
