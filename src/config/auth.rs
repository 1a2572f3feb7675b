//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest HS256 secret accepted in production.
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Largest clock skew tolerated when checking `exp`.
pub const MAX_LEEWAY_SECS: u64 = 300;

/// Bearer token validation settings (HS256 shared secret).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC secret used to verify token signatures
    pub jwt_secret: SecretString,

    /// Expected `iss` claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Expected `aud` claim
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Allowed clock skew in seconds
    #[serde(default = "default_leeway")]
    pub leeway_secs: u64,
}

impl AuthConfig {
    /// Creates a config with default issuer, audience and leeway.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: SecretString::new(jwt_secret.into()),
            issuer: default_issuer(),
            audience: default_audience(),
            leeway_secs: default_leeway(),
        }
    }

    /// Validate authentication configuration
    ///
    /// Development accepts any non-empty secret; production requires
    /// at least [`MIN_PRODUCTION_SECRET_LEN`] bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if self.issuer.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__ISSUER"));
        }
        if self.audience.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__AUDIENCE"));
        }
        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ValidationError::LeewayTooLarge {
                max: MAX_LEEWAY_SECS,
            });
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_LEN {
            return Err(ValidationError::WeakJwtSecret {
                min: MIN_PRODUCTION_SECRET_LEN,
            });
        }
        Ok(())
    }
}

fn default_issuer() -> String {
    "mirror-mind".to_string()
}

fn default_audience() -> String {
    "mirror-mind-api".to_string()
}

fn default_leeway() -> u64 {
    30
}
