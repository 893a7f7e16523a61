//! Admin authorization middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use serde_json::json;

use crate::domain::entities::IdentityClaims;
use crate::error::AppError;

/// Rejects callers whose verified identity lacks the admin flag.
///
/// Must be layered after [`super::auth`]: it reads the claims that layer
/// placed into request extensions and performs no credential check of its
/// own. A pure predicate — no I/O, no context mutation.
///
/// # Errors
///
/// - `401 Unauthorized` when no identity is attached (the route is wired
///   without authentication)
/// - `403 Forbidden` when the identity is not an admin
pub async fn layer(req: Request, next: Next) -> Result<Response, AppError> {
    let claims = req
        .extensions()
        .get::<IdentityClaims>()
        .ok_or_else(|| AppError::unauthorized("Access denied. No token provided.", json!({})))?;

    if !claims.is_admin {
        return Err(AppError::forbidden("Access denied.", json!({})));
    }

    Ok(next.run(req).await)
}
