use std::sync::Arc;

use async_trait::async_trait;
use auth::CredentialManager;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::LoginResult;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::user::ports::UserRepository;

/// Resolves credentials to users.
///
/// Stateless apart from the injected store and credential manager; a request
/// that fails here is rejected and never retried.
pub struct Authenticator<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    credentials: Arc<CredentialManager>,
}

impl<UR> Authenticator<UR>
where
    UR: UserRepository,
{
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `repository` - User lookup implementation
    /// * `credentials` - Password and token primitives configured for this process
    pub fn new(repository: Arc<UR>, credentials: Arc<CredentialManager>) -> Self {
        Self {
            repository,
            credentials,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for Authenticator<UR>
where
    UR: UserRepository,
{
    async fn resolve_user(&self, token: &str) -> Result<User, AuthError> {
        let access_token = self.credentials.decode_token(token)?;

        let subject = access_token
            .subject
            .filter(|subject| !subject.is_empty())
            .ok_or(AuthError::MissingSubject)?;

        self.repository
            .find_by_email(&subject)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    async fn authenticate_password(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let Some(user) = self.repository.find_by_email(email).await? else {
            // Both failure paths do the same hashing work.
            self.credentials.verify_decoy(password);
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .credentials
            .verify_password(password, &user.password_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AuthError> {
        let user = self.authenticate_password(email, password).await?;

        let access_token = self.credentials.issue_token(user.email.as_str())?;
        tracing::info!(user_id = %user.id, "Access token issued");

        Ok(LoginResult {
            user,
            access_token,
            expires_in: self.credentials.ttl().num_seconds(),
        })
    }
}
