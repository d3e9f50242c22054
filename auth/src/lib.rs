//! Authentication utilities library
//!
//! Provides the credential primitives the services build on:
//! - Password hashing (Argon2id)
//! - Signed, time-bound access tokens (JWT, HMAC)
//! - A `CredentialManager` tying both to one process-wide `TokenConfig`
//!
//! User lookup is not part of this crate. Each service defines its own store
//! traits and resolves token subjects against them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Complete Credential Flow
//! ```
//! use auth::{CredentialManager, TokenConfig};
//!
//! let config = TokenConfig::new("secret_key_at_least_32_bytes_long!")
//!     .unwrap()
//!     .with_ttl_minutes(30)
//!     .unwrap();
//! let credentials = CredentialManager::new(config);
//!
//! // Register: hash password
//! let hash = credentials.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! assert!(credentials.verify_password("password123", &hash));
//! let token = credentials.issue_token("alice@example.com").unwrap();
//!
//! // Later requests: decode token
//! let decoded = credentials.decode_token(&token).unwrap();
//! assert_eq!(decoded.subject.as_deref(), Some("alice@example.com"));
//! ```

pub mod config;
pub mod credentials;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use config::TokenConfig;
pub use config::TokenConfigError;
pub use config::DEFAULT_TTL_MINUTES;
pub use credentials::AccessToken;
pub use credentials::CredentialManager;
pub use jwt::Claims;
pub use jwt::JwtHandler;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
