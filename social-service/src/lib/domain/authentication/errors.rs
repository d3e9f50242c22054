use auth::TokenError;
use thiserror::Error;

use crate::user::errors::UserError;

const GENERIC_MESSAGE: &str = "Could not validate credentials";
const EXPIRED_MESSAGE: &str = "Token has expired";
const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect email or password";

/// Authentication failures.
///
/// Every variant ends the request. Only `Store` and `TokenIssue` are
/// infrastructure faults; the rest are rejections of what the client sent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Expired token")]
    ExpiredToken,

    #[error("Token has no subject")]
    MissingSubject,

    #[error("Token subject does not match a user")]
    UserNotFound,

    #[error("User store error: {0}")]
    Store(String),

    #[error("Token issuing failed: {0}")]
    TokenIssue(String),
}

impl AuthError {
    /// Message safe to show the client.
    ///
    /// Expiry is reported as such so clients know to log in again. Every other
    /// token or lookup failure shares one message.
    pub fn client_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
            AuthError::ExpiredToken => EXPIRED_MESSAGE,
            AuthError::MalformedToken(_)
            | AuthError::InvalidSignature
            | AuthError::MissingSubject
            | AuthError::UserNotFound
            | AuthError::Store(_)
            | AuthError::TokenIssue(_) => GENERIC_MESSAGE,
        }
    }

    /// Short stable name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::MalformedToken(_) => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::ExpiredToken => "expired_token",
            AuthError::MissingSubject => "missing_subject",
            AuthError::UserNotFound => "user_not_found",
            AuthError::Store(_) => "store",
            AuthError::TokenIssue(_) => "token_issue",
        }
    }

    /// Whether the failure is a server-side fault rather than a rejected credential.
    pub fn is_internal(&self) -> bool {
        matches!(self, AuthError::Store(_) | AuthError::TokenIssue(_))
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::MalformedToken(msg) => AuthError::MalformedToken(msg),
            TokenError::InvalidSignature => AuthError::InvalidSignature,
            TokenError::ExpiredToken => AuthError::ExpiredToken,
            TokenError::EncodingFailed(msg) => AuthError::TokenIssue(msg),
        }
    }
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        AuthError::Store(err.to_string())
    }
}
