use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Comment;
use crate::domain::post::models::CreateCommentCommand;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Like;
use crate::domain::post::models::LikePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostWithComments;
use crate::domain::post::models::PostWithLikes;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for post, comment and like operations.
///
/// Write operations take the authenticated author explicitly.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    async fn create_post(&self, author: &User, command: CreatePostCommand)
        -> Result<Post, PostError>;

    /// All posts with their like counts, newest first.
    async fn list_posts(&self) -> Result<Vec<PostWithLikes>, PostError>;

    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn get_post_with_comments(&self, id: PostId) -> Result<PostWithComments, PostError>;

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, PostError>;

    /// # Errors
    /// * `NotFound` - Commented post does not exist
    async fn create_comment(
        &self,
        author: &User,
        command: CreateCommentCommand,
    ) -> Result<Comment, PostError>;

    /// # Errors
    /// * `NotFound` - Liked post does not exist
    async fn like_post(&self, user: &User, command: LikePostCommand) -> Result<Like, PostError>;
}

/// Persistence operations for posts and their comments and likes.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    async fn insert_post(&self, user_id: &UserId, body: &str) -> Result<Post, PostError>;

    /// Retrieve a post with its like count.
    ///
    /// # Returns
    /// Optional post (None if not found)
    async fn find_post(&self, id: &PostId) -> Result<Option<PostWithLikes>, PostError>;

    async fn list_posts(&self) -> Result<Vec<PostWithLikes>, PostError>;

    async fn insert_comment(
        &self,
        post_id: &PostId,
        user_id: &UserId,
        body: &str,
    ) -> Result<Comment, PostError>;

    async fn list_comments(&self, post_id: &PostId) -> Result<Vec<Comment>, PostError>;

    async fn insert_like(&self, post_id: &PostId, user_id: &UserId) -> Result<Like, PostError>;
}
