use std::collections::HashMap;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// JWT claims carried by access tokens.
///
/// Standard RFC 7519 fields plus custom fields flattened from `extra`
/// (`username` and `email` for user tokens).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Additional custom fields (flattened into token)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for an authenticated user.
    ///
    /// # Arguments
    /// * `user_id` - User identifier, stored as `sub`
    /// * `username` - Stored in `extra.username`
    /// * `email` - Stored in `extra.email`
    /// * `expiration_minutes` - Minutes until the token expires
    ///
    /// # Returns
    /// Claims with sub, exp, iat, username and email set
    pub fn for_user(
        user_id: Uuid,
        username: &str,
        email: &str,
        expiration_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::minutes(expiration_minutes);

        Self::new()
            .with_subject(user_id)
            .with_expiration(expiration.timestamp())
            .with_issued_at(now.timestamp())
            .with_extra("username", username)
            .with_extra("email", email)
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }

    /// Subject parsed as a user id.
    pub fn user_id(&self) -> Option<Uuid> {
        self.sub.as_deref().and_then(|s| Uuid::parse_str(s).ok())
    }

    pub fn username(&self) -> Option<String> {
        self.extra_str("username")
    }

    pub fn email(&self) -> Option<String> {
        self.extra_str("email")
    }

    fn extra_str(&self, key: &str) -> Option<String> {
        self.extra
            .get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| exp < current_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new().with_subject("user123");
        assert_eq!(claims.sub, Some("user123".to_string()));
        assert!(claims.exp.is_none());
    }

    #[test]
    fn test_for_user() {
        let user_id = Uuid::new_v4();
        let claims = Claims::for_user(user_id, "alice", "alice@example.com", 30);

        assert_eq!(claims.user_id(), Some(user_id));
        assert_eq!(claims.username(), Some("alice".to_string()));
        assert_eq!(claims.email(), Some("alice@example.com".to_string()));

        let exp = claims.exp.expect("exp is set");
        let iat = claims.iat.expect("iat is set");
        assert_eq!(exp - iat, 30 * 60);
    }

    #[test]
    fn test_user_id_rejects_non_uuid_subject() {
        let claims = Claims::new().with_subject("42");
        assert_eq!(claims.user_id(), None);
    }

    #[test]
    fn test_builder_pattern() {
        let claims = Claims::new()
            .with_subject("user123")
            .with_expiration(1234567890)
            .with_issued_at(1234567800)
            .with_issuer("users")
            .with_extra("role", "admin");

        assert_eq!(claims.exp, Some(1234567890));
        assert_eq!(claims.iat, Some(1234567800));
        assert_eq!(claims.iss, Some("users".to_string()));
        assert_eq!(
            claims.extra.get("role").and_then(|v| v.as_str()),
            Some("admin")
        );
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims::new().with_expiration(1000);

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
