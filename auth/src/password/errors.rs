use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is not a valid PHC string.
    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
