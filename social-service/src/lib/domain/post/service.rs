use std::sync::Arc;

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
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::User;

/// Domain service implementation for posts, comments and likes.
pub struct PostService<PR>
where
    PR: PostRepository,
{
    repository: Arc<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }

    async fn require_post(&self, id: &PostId) -> Result<PostWithLikes, PostError> {
        self.repository
            .find_post(id)
            .await?
            .ok_or(PostError::NotFound(*id))
    }
}

#[async_trait]
impl<PR> PostServicePort for PostService<PR>
where
    PR: PostRepository,
{
    async fn create_post(
        &self,
        author: &User,
        command: CreatePostCommand,
    ) -> Result<Post, PostError> {
        let post = self
            .repository
            .insert_post(&author.id, &command.body)
            .await?;
        tracing::debug!(post_id = %post.id, user_id = %author.id, "Post created");

        Ok(post)
    }

    async fn list_posts(&self) -> Result<Vec<PostWithLikes>, PostError> {
        self.repository.list_posts().await
    }

    async fn get_post_with_comments(&self, id: PostId) -> Result<PostWithComments, PostError> {
        let post = self.require_post(&id).await?;
        let comments = self.repository.list_comments(&id).await?;

        Ok(PostWithComments { post, comments })
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, PostError> {
        self.repository.list_comments(&post_id).await
    }

    async fn create_comment(
        &self,
        author: &User,
        command: CreateCommentCommand,
    ) -> Result<Comment, PostError> {
        self.require_post(&command.post_id).await?;

        let comment = self
            .repository
            .insert_comment(&command.post_id, &author.id, &command.body)
            .await?;
        tracing::debug!(
            comment_id = comment.id,
            post_id = %command.post_id,
            user_id = %author.id,
            "Comment created"
        );

        Ok(comment)
    }

    async fn like_post(&self, user: &User, command: LikePostCommand) -> Result<Like, PostError> {
        self.require_post(&command.post_id).await?;

        let like = self
            .repository
            .insert_like(&command.post_id, &user.id)
            .await?;
        tracing::debug!(post_id = %command.post_id, user_id = %user.id, "Post liked");

        Ok(like)
    }
}
