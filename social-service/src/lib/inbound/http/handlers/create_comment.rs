use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::list_comments::CommentData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::models::CreateCommentCommand;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_comment(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let command = CreateCommentCommand {
        body: body.body,
        post_id: PostId(body.post_id),
    };

    state
        .post_service
        .create_comment(&user, command)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::CREATED, comment.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCommentRequest {
    body: String,
    post_id: i64,
}
