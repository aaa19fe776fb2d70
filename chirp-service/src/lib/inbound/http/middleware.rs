use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::handlers::authorization_header;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated identity in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that resolves the caller's identity from the bearer access
/// token and adds it to request extensions.
///
/// The specific failure kind (missing header, malformed header, bad
/// signature, expired, bad subject) is logged before it collapses to 401.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let authorization = authorization_header(req.headers()).map_err(|e| {
        tracing::warn!(error = %e, "Request authentication failed");
        ApiError::from(e).into_response()
    })?;

    let user_id = state
        .auth_service
        .identify(authorization)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Request authentication failed");
            ApiError::from(e).into_response()
        })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}
