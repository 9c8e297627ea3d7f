//! Application Configuration
//!
//! Configuration for the Auth application layer.

use platform::crypto::{from_base64, random_key};
use thiserror::Error;

/// Environment variable holding the token secret (base64, 32 bytes)
pub const TOKEN_SECRET_ENV: &str = "AUTH_TOKEN_SECRET";
/// Environment variable holding the optional password pepper
pub const PASSWORD_PEPPER_ENV: &str = "PASSWORD_PEPPER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("AUTH_TOKEN_SECRET must be set")]
    MissingTokenSecret,

    #[error("AUTH_TOKEN_SECRET must be base64 encoding exactly 32 bytes")]
    InvalidTokenSecret,
}

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC key for access tokens (32 bytes)
    pub token_secret: [u8; 32],
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn new(token_secret: [u8; 32], password_pepper: Option<Vec<u8>>) -> Self {
        Self {
            token_secret,
            password_pepper,
        }
    }

    /// Create config with a random token secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn development() -> Self {
        Self::new(random_key(), None)
    }

    /// Load from the process environment.
    ///
    /// Release builds refuse to start without a token secret; debug builds
    /// fall back to a random one.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token_secret = match std::env::var(TOKEN_SECRET_ENV) {
            Ok(encoded) => Self::decode_secret(&encoded)?,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!(env = TOKEN_SECRET_ENV, "Token secret not set, using a random one");
                random_key()
            }
            Err(_) => return Err(ConfigError::MissingTokenSecret),
        };

        let password_pepper = std::env::var(PASSWORD_PEPPER_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .map(String::into_bytes);

        Ok(Self::new(token_secret, password_pepper))
    }

    fn decode_secret(encoded: &str) -> Result<[u8; 32], ConfigError> {
        from_base64(encoded.trim())
            .ok()
            .and_then(|bytes| <[u8; 32]>::try_from(bytes.as_slice()).ok())
            .ok_or(ConfigError::InvalidTokenSecret)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::crypto::to_base64;

    #[test]
    fn test_decode_secret() {
        let key = [7u8; 32];
        assert_eq!(AuthConfig::decode_secret(&to_base64(&key)).unwrap(), key);
    }

    #[test]
    fn test_decode_secret_wrong_length() {
        assert!(matches!(
            AuthConfig::decode_secret(&to_base64(&[1u8; 16])),
            Err(ConfigError::InvalidTokenSecret)
        ));
        assert!(matches!(
            AuthConfig::decode_secret("not base64!"),
            Err(ConfigError::InvalidTokenSecret)
        ));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AuthConfig::new([9u8; 32], Some(b"pepper".to_vec()));
        let debug = format!("{:?}", config);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("pepper\""));
    }
}
