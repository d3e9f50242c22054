use std::fmt;

use crate::domain::user::models::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub i64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub body: String,
    pub user_id: UserId,
}

/// Post together with the number of likes it has received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithLikes {
    pub post: Post,
    pub likes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithComments {
    pub post: PostWithLikes,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub body: String,
    pub post_id: PostId,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub id: i64,
    pub post_id: PostId,
    pub user_id: UserId,
}

#[derive(Debug)]
pub struct CreatePostCommand {
    pub body: String,
}

#[derive(Debug)]
pub struct CreateCommentCommand {
    pub body: String,
    pub post_id: PostId,
}

#[derive(Debug)]
pub struct LikePostCommand {
    pub post_id: PostId,
}
