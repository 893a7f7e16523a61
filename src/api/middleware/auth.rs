//! Token authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the opaque auth token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Authenticates requests using the `x-auth-token` header.
///
/// # Authentication Flow
///
/// 1. Read the `x-auth-token` header
/// 2. Verify the token signature and decode the embedded claims
/// 3. Attach the claims to request extensions
/// 4. Continue to the next middleware/handler
///
/// No storage is touched; verification is a pure computation over the token.
///
/// # Errors
///
/// - `401 Unauthorized` when the header is absent or empty — the caller
///   supplied nothing
/// - `400 Bad Request` when a token is present but malformed or carries a
///   bad signature — the caller supplied garbage
pub async fn layer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(AUTH_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if token.is_empty() {
        return Err(AppError::unauthorized(
            "Access denied. No token provided.",
            json!({}),
        ));
    }

    let claims = state
        .auth_service
        .verify_token(token)
        .map_err(|err| AppError::invalid_token("Invalid token.", json!({"reason": err.to_string()})))?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
