use crate::domain::user::models::User;

/// Outcome of a successful password login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub access_token: String,
    /// Lifetime of `access_token` in seconds
    pub expires_in: i64,
}
