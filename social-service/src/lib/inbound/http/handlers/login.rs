use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Exchange an email and password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let result = state
        .authenticator
        .login(&body.email, &body.password)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        TokenResponseData {
            access_token: result.access_token,
            token_type: "bearer".to_string(),
            expires_in: result.expires_in,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}
