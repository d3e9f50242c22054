use std::sync::Arc;

use async_trait::async_trait;
use auth::CredentialManager;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    credentials: Arc<CredentialManager>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `credentials` - Shared credential manager that owns password hashing
    pub fn new(repository: Arc<UR>, credentials: Arc<CredentialManager>) -> Self {
        Self {
            repository,
            credentials,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let email = command.email;

        if self
            .repository
            .find_by_email(email.as_str())
            .await?
            .is_some()
        {
            tracing::info!(email = %email, "Registration rejected, email already registered");
            return Err(UserError::DuplicateEmail(email.to_string()));
        }

        let password_hash = self.credentials.hash_password(&command.password)?;

        // The store's unique constraint still decides if two registrations race.
        let id = self.repository.insert(&email, &password_hash).await?;
        tracing::info!(user_id = %id, "User registered");

        Ok(User {
            id,
            email,
            password_hash,
        })
    }
}
