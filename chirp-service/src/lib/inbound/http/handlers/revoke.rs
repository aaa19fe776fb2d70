use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::authorization_header;
use super::ApiError;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn revoke(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let authorization = authorization_header(&headers)?;

    state
        .auth_service
        .revoke(authorization)
        .await
        .map_err(|e| match e {
            // Unlike refresh, an unknown or already-revoked token is a 404
            AuthError::SessionNotFound => {
                ApiError::NotFound("Refresh token not found".to_string())
            }
            e => ApiError::from(e),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
