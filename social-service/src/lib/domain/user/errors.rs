use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password hashing failed: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("A user with that email already exists")]
    DuplicateEmail(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
