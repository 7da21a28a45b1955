/// Bearer token authentication
///
/// Validates the access token in the `Authorization` header and inserts an
/// [`AuthUser`] into the request extensions for downstream handlers.

use crate::{app::AppState, error::ApiError};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tradeledger_shared::auth::jwt;

/// Identity of the caller, taken from a validated access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
}

pub async fn jwt_auth_layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Expected Bearer token".to_string()))?;

    let claims = jwt::validate_access_token(token, state.jwt_secret())?;
    let user_id = claims
        .user_id()
        .ok_or_else(|| ApiError::Unauthorized("Invalid token subject".to_string()))?;

    tracing::debug!(user_id, "Authenticated request");
    req.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(req).await)
}
