use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::models::PostWithLikes;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PostWithLikesData>>, ApiError> {
    let posts = state.post_service.list_posts().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        posts.iter().map(PostWithLikesData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostWithLikesData {
    pub id: i64,
    pub body: String,
    pub user_id: i64,
    pub likes: i64,
}

impl From<&PostWithLikes> for PostWithLikesData {
    fn from(value: &PostWithLikes) -> Self {
        Self {
            id: value.post.id.0,
            body: value.post.body.clone(),
            user_id: value.post.user_id.0,
            likes: value.likes,
        }
    }
}
