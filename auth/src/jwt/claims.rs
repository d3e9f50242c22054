use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;

/// Access token claims.
///
/// Uses the RFC 7519 names. Timestamps are Unix seconds. Fields are optional
/// on the wire so that a token missing one of them still deserializes and can
/// be rejected with a precise reason instead of a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the identity the token asserts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for a subject expiring `ttl` from now.
    ///
    /// A negative `ttl` yields claims that are already expired.
    ///
    /// # Errors
    /// * `EncodingFailed` - The expiry falls outside the representable time range
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Result<Self, TokenError> {
        let now = Utc::now();
        let expiration = now.checked_add_signed(ttl).ok_or_else(|| {
            TokenError::EncodingFailed("token expiry out of range".to_string())
        })?;

        Ok(Self {
            sub: Some(subject.to_string()),
            exp: Some(expiration.timestamp()),
            iat: Some(now.timestamp()),
        })
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

    /// Check if the token is expired at `current_timestamp`.
    ///
    /// The expiration instant itself is already expired. Claims without `exp`
    /// never expire here; callers that require expiry check for it separately.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp.map_or(false, |exp| current_timestamp >= exp)
    }
}
