use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::TokenError;

/// JWT token handler for signing and verifying tokens.
///
/// Generic over the claims type. Only verifies integrity; expiry is left to
/// the caller so that it is checked after the signature and against a single
/// clock reading.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a shared secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `algorithm` - HMAC algorithm used for signing and accepted when verifying
    ///
    /// # Security Notes
    /// - The secret should be at least as long as the HMAC output (32 bytes for HS256)
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
        }
    }

    /// Encode claims into a signed JWT.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a JWT's signature and deserialize its claims.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signature does not verify, or the header names a different algorithm
    /// * `MalformedToken` - Token structure, encoding or payload cannot be parsed
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        let token_data = decode::<T>(token, &self.decoding_key, &validation)?;

        Ok(token_data.claims)
    }
}
