use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::list_comments::CommentData;
use super::list_posts::PostWithLikesData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<ApiSuccess<PostWithCommentsData>, ApiError> {
    let result = state
        .post_service
        .get_post_with_comments(PostId(post_id))
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        PostWithCommentsData {
            post: (&result.post).into(),
            comments: result.comments.iter().map(CommentData::from).collect(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostWithCommentsData {
    pub post: PostWithLikesData,
    pub comments: Vec<CommentData>,
}
