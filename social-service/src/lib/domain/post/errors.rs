use thiserror::Error;

use crate::domain::post::models::PostId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostError {
    #[error("Post not found: {0}")]
    NotFound(PostId),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
