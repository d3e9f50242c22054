use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// Request extension holding the user a bearer token resolved to.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that resolves the bearer token to a user and adds it to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req).map_err(IntoResponse::into_response)?;

    let user = state
        .authenticator
        .resolve_user(token)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    tracing::debug!(user_id = %user.id, "Request authenticated");
    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!(kind = "missing_header", "Authentication rejected");
            ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
        })?;

    // The scheme name is case-insensitive.
    let token = auth_header
        .to_str()
        .ok()
        .and_then(|value| value.trim().split_once(char::is_whitespace))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!(kind = "invalid_header", "Authentication rejected");
            ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
        })?;

    Ok(token)
}
