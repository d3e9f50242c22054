use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with a hashed password.
    ///
    /// # Arguments
    /// * `command` - Validated email and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered, nothing is written
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;
}

/// Persistence operations for users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Arguments
    /// * `email` - Unique email address
    /// * `password_hash` - Already hashed password
    ///
    /// # Returns
    /// Identifier assigned by the store
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn insert(&self, email: &EmailAddress, password_hash: &str)
        -> Result<UserId, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
