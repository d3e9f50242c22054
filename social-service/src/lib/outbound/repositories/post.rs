use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::SqlitePool;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Comment;
use crate::domain::post::models::Like;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostWithLikes;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::UserId;

const SELECT_POSTS_WITH_LIKES: &str = r#"
    SELECT posts.id AS id, posts.body AS body, posts.user_id AS user_id,
           COUNT(likes.id) AS likes
    FROM posts
    LEFT JOIN likes ON likes.post_id = posts.id
"#;

pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PostRow {
    id: i64,
    body: String,
    user_id: i64,
    likes: i64,
}

impl From<PostRow> for PostWithLikes {
    fn from(row: PostRow) -> Self {
        PostWithLikes {
            post: Post {
                id: PostId(row.id),
                body: row.body,
                user_id: UserId(row.user_id),
            },
            likes: row.likes,
        }
    }
}

#[derive(FromRow)]
struct CommentRow {
    id: i64,
    body: String,
    post_id: i64,
    user_id: i64,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            body: row.body,
            post_id: PostId(row.post_id),
            user_id: UserId(row.user_id),
        }
    }
}

fn database_error(e: sqlx::Error) -> PostError {
    PostError::DatabaseError(e.to_string())
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn insert_post(&self, user_id: &UserId, body: &str) -> Result<Post, PostError> {
        let result = sqlx::query("INSERT INTO posts (body, user_id) VALUES (?1, ?2)")
            .bind(body)
            .bind(user_id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(Post {
            id: PostId(result.last_insert_rowid()),
            body: body.to_string(),
            user_id: *user_id,
        })
    }

    async fn find_post(&self, id: &PostId) -> Result<Option<PostWithLikes>, PostError> {
        let query = format!("{SELECT_POSTS_WITH_LIKES} WHERE posts.id = ?1 GROUP BY posts.id");
        let row: Option<PostRow> = sqlx::query_as(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(row.map(PostWithLikes::from))
    }

    async fn list_posts(&self) -> Result<Vec<PostWithLikes>, PostError> {
        let query = format!("{SELECT_POSTS_WITH_LIKES} GROUP BY posts.id ORDER BY posts.id DESC");
        let rows: Vec<PostRow> = sqlx::query_as(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(rows.into_iter().map(PostWithLikes::from).collect())
    }

    async fn insert_comment(
        &self,
        post_id: &PostId,
        user_id: &UserId,
        body: &str,
    ) -> Result<Comment, PostError> {
        let result =
            sqlx::query("INSERT INTO comments (body, post_id, user_id) VALUES (?1, ?2, ?3)")
                .bind(body)
                .bind(post_id.0)
                .bind(user_id.0)
                .execute(&self.pool)
                .await
                .map_err(database_error)?;

        Ok(Comment {
            id: result.last_insert_rowid(),
            body: body.to_string(),
            post_id: *post_id,
            user_id: *user_id,
        })
    }

    async fn list_comments(&self, post_id: &PostId) -> Result<Vec<Comment>, PostError> {
        let rows: Vec<CommentRow> = sqlx::query_as(
            r#"
            SELECT id, body, post_id, user_id
            FROM comments
            WHERE post_id = ?1
            ORDER BY id
            "#,
        )
        .bind(post_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn insert_like(&self, post_id: &PostId, user_id: &UserId) -> Result<Like, PostError> {
        let result = sqlx::query("INSERT INTO likes (post_id, user_id) VALUES (?1, ?2)")
            .bind(post_id.0)
            .bind(user_id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(Like {
            id: result.last_insert_rowid(),
            post_id: *post_id,
            user_id: *user_id,
        })
    }
}
