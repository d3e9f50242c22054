use std::str::FromStr;

use chrono::Duration;
use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Default access token lifetime.
pub const DEFAULT_TTL_MINUTES: i64 = 30;

/// Error for invalid token configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenConfigError {
    #[error("Signing secret must not be empty")]
    EmptySecret,

    #[error("Unsupported signing algorithm: {0} (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),

    #[error("Token lifetime out of range: {0} minutes")]
    InvalidTtl(i64),
}

/// Process-wide token settings: signing secret, algorithm and lifetime.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Clone)]
pub struct TokenConfig {
    secret: Vec<u8>,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenConfig {
    /// Create a configuration using HS256 and the default lifetime.
    ///
    /// # Errors
    /// * `EmptySecret` - `secret` is empty
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, TokenConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(TokenConfigError::EmptySecret);
        }

        Ok(Self {
            secret,
            algorithm: Algorithm::HS256,
            ttl: Duration::minutes(DEFAULT_TTL_MINUTES),
        })
    }

    /// Select the signing algorithm by name.
    ///
    /// Only the HMAC family is accepted since the key is a shared secret.
    ///
    /// # Errors
    /// * `UnsupportedAlgorithm` - Unknown name or a non-HMAC algorithm
    pub fn with_algorithm(mut self, name: &str) -> Result<Self, TokenConfigError> {
        let algorithm = Algorithm::from_str(name)
            .map_err(|_| TokenConfigError::UnsupportedAlgorithm(name.to_string()))?;

        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
                self.algorithm = algorithm;
                Ok(self)
            }
            _ => Err(TokenConfigError::UnsupportedAlgorithm(name.to_string())),
        }
    }

    /// Set the token lifetime in minutes. Negative values produce tokens that
    /// are expired on issue.
    ///
    /// # Errors
    /// * `InvalidTtl` - `minutes` does not fit in a `Duration`
    pub fn with_ttl_minutes(mut self, minutes: i64) -> Result<Self, TokenConfigError> {
        self.ttl = Duration::try_minutes(minutes).ok_or(TokenConfigError::InvalidTtl(minutes))?;
        Ok(self)
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

// Keeps the secret out of logs.
impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TokenConfig::new("secret").unwrap();

        assert_eq!(config.algorithm(), Algorithm::HS256);
        assert_eq!(config.ttl(), Duration::minutes(30));
        assert_eq!(config.secret(), b"secret");
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert_eq!(
            TokenConfig::new("").unwrap_err(),
            TokenConfigError::EmptySecret
        );
    }

    #[test]
    fn test_hmac_algorithms_accepted() {
        for (name, expected) in [
            ("HS256", Algorithm::HS256),
            ("HS384", Algorithm::HS384),
            ("HS512", Algorithm::HS512),
        ] {
            let config = TokenConfig::new("secret")
                .unwrap()
                .with_algorithm(name)
                .unwrap();
            assert_eq!(config.algorithm(), expected);
        }
    }

    #[test]
    fn test_other_algorithms_rejected() {
        for name in ["RS256", "ES256", "none", "hs256", ""] {
            let result = TokenConfig::new("secret").unwrap().with_algorithm(name);
            assert!(
                matches!(result, Err(TokenConfigError::UnsupportedAlgorithm(_))),
                "{name:?} was accepted"
            );
        }
    }

    #[test]
    fn test_ttl_minutes() {
        let config = TokenConfig::new("secret")
            .unwrap()
            .with_ttl_minutes(-5)
            .unwrap();
        assert_eq!(config.ttl(), Duration::minutes(-5));
    }

    #[test]
    fn test_out_of_range_ttl_rejected() {
        for minutes in [i64::MAX, i64::MIN] {
            assert_eq!(
                TokenConfig::new("secret")
                    .unwrap()
                    .with_ttl_minutes(minutes)
                    .unwrap_err(),
                TokenConfigError::InvalidTtl(minutes)
            );
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = TokenConfig::new("super-secret-value").unwrap();
        let debug = format!("{:?}", config);

        assert!(!debug.contains("super-secret-value"));
        assert!(debug.contains("<redacted>"));
    }
}
