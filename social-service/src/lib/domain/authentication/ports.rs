use async_trait::async_trait;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::LoginResult;
use crate::domain::user::models::User;

/// Port for credential checks used by the inbound adapters.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Resolve a bearer token to the user it was issued for.
    ///
    /// # Arguments
    /// * `token` - Raw token string, without any `Bearer` prefix
    ///
    /// # Errors
    /// * `MalformedToken` - Token cannot be parsed
    /// * `InvalidSignature` - Token was not signed with the current key
    /// * `ExpiredToken` - Token lifetime has passed
    /// * `MissingSubject` - Token carries no subject
    /// * `UserNotFound` - Subject does not match a stored user
    /// * `Store` - User lookup failed
    async fn resolve_user(&self, token: &str) -> Result<User, AuthError>;

    /// Check an email and password pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, indistinguishably
    /// * `Store` - User lookup failed
    async fn authenticate_password(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Check credentials and issue an access token for the user.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `TokenIssue` - Token signing failed
    /// * `Store` - User lookup failed
    async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AuthError>;
}
