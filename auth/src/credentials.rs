use chrono::DateTime;
use chrono::Utc;

use crate::config::TokenConfig;
use crate::jwt::Claims;
use crate::jwt::JwtHandler;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Credential manager combining password hashing and access token handling.
///
/// Holds no mutable state; every check is recomputed from its inputs, so one
/// instance can be shared across any number of concurrent requests.
pub struct CredentialManager {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    config: TokenConfig,
}

/// Verified contents of an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Identity the token asserts, if the claim was present
    pub subject: Option<String>,
    /// Instant from which the token is no longer valid
    pub expires_at: DateTime<Utc>,
}

impl CredentialManager {
    /// Create a new credential manager.
    ///
    /// # Arguments
    /// * `config` - Signing secret, algorithm and token lifetime
    pub fn new(config: TokenConfig) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(config.secret(), config.algorithm()),
            config,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash. Malformed hashes never match.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Spend a password verification when there is no stored hash to check,
    /// so an unknown account costs as much as a wrong password.
    pub fn verify_decoy(&self, password: &str) {
        self.password_hasher.verify_decoy(password)
    }

    /// Issue a signed access token for `subject` valid for the configured TTL.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed or the expiry is out of range
    pub fn issue_token(&self, subject: &str) -> Result<String, TokenError> {
        let claims = Claims::for_subject(subject, self.config.ttl())?;
        self.jwt_handler.encode(&claims)
    }

    /// Verify and decode an access token.
    ///
    /// The signature is checked before any claim is looked at, then the
    /// token must carry an expiry that has not been reached.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature verification failed
    /// * `MalformedToken` - Token cannot be parsed or carries no valid expiry
    /// * `ExpiredToken` - Current time is at or past the expiry
    pub fn decode_token(&self, token: &str) -> Result<AccessToken, TokenError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        let exp = claims
            .exp
            .ok_or_else(|| TokenError::MalformedToken("missing exp claim".to_string()))?;
        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| TokenError::MalformedToken("exp claim out of range".to_string()))?;

        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::ExpiredToken);
        }

        Ok(AccessToken {
            subject: claims.sub,
            expires_at,
        })
    }

    /// Configured token lifetime.
    pub fn ttl(&self) -> chrono::Duration {
        self.config.ttl()
    }
}
