//! Authentication utilities shared by the booking services.
//!
//! - Password hashing (Argon2id)
//! - JWT issuance and validation (HS256, `sub` = user id)
//! - Current-user resolution from a bearer header or the `access_token` cookie
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Login Flow
//! ```
//! use auth::Authenticator;
//! use uuid::Uuid;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 30);
//! let hash = auth.hash_password("password123").unwrap();
//!
//! let user_id = Uuid::new_v4();
//! let claims = auth.claims_for(user_id, "alice", "alice@example.com");
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! let decoded = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(decoded.user_id(), Some(user_id));
//! ```

pub mod authenticator;
pub mod config;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::DEFAULT_EXPIRATION_MINUTES;
pub use config::JwtConfig;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use middleware::access_token_cookie;
pub use middleware::authenticate;
pub use middleware::removal_cookie;
pub use middleware::resolve_user;
pub use middleware::AuthenticatedUser;
pub use middleware::ACCESS_TOKEN_COOKIE;
pub use password::PasswordError;
pub use password::PasswordHasher;
