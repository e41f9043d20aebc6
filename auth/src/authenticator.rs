use serde::Serialize;
use uuid::Uuid;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Default lifetime of an access token.
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 30;

/// Authentication coordinator combining password verification and JWT handling.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    expiration_minutes: i64,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
    /// Always `bearer`
    pub token_type: &'static str,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `expiration_minutes` - Lifetime of issued tokens
    pub fn new(jwt_secret: &[u8], expiration_minutes: i64) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            expiration_minutes,
        }
    }

    pub fn expiration_minutes(&self) -> i64 {
        self.expiration_minutes
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Claims for a user token expiring after the configured lifetime.
    pub fn claims_for(&self, user_id: Uuid, username: &str, email: &str) -> Claims {
        Claims::for_user(user_id, username, email, self.expiration_minutes)
    }

    /// Verify credentials and generate JWT token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claims` - JWT claims to encode in token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unreadable
    /// * `JwtError` - Token generation failed
    pub fn authenticate<T: Serialize>(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &T,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.encode(claims)?;

        Ok(AuthenticationResult {
            access_token,
            token_type: "bearer",
        })
    }

    /// Issue a token for a user without checking a password.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(
        &self,
        user_id: Uuid,
        username: &str,
        email: &str,
    ) -> Result<String, JwtError> {
        self.jwt_handler
            .encode(&self.claims_for(user_id, username, email))
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `JwtError` - Signature, expiry or claim checks failed
    pub fn verify_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
