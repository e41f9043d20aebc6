use serde::Deserialize;

use crate::authenticator::Authenticator;
use crate::authenticator::DEFAULT_EXPIRATION_MINUTES;

/// `[jwt]` section of a service configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_expiration_minutes")]
    pub expiration_minutes: i64,
}

fn default_expiration_minutes() -> i64 {
    DEFAULT_EXPIRATION_MINUTES
}

impl JwtConfig {
    pub fn authenticator(&self) -> Authenticator {
        Authenticator::new(self.secret.as_bytes(), self.expiration_minutes)
    }
}
