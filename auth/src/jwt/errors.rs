use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

/// Error type for access token operations.
///
/// `InvalidSignature`, `MalformedToken` and `ExpiredToken` stay distinct so
/// callers can choose different user-facing messages for them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    MalformedToken(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    ExpiredToken,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            // A token whose header names another algorithm was not signed by us.
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                TokenError::InvalidSignature
            }
            ErrorKind::ExpiredSignature => TokenError::ExpiredToken,
            _ => TokenError::MalformedToken(err.to_string()),
        }
    }
}
