//! Router configuration composing the middleware chain per route.
//!
//! # Route Structure
//!
//! - `GET    /health`           - Storage probe (public)
//! - `GET    /api/genres`       - List genres (public)
//! - `GET    /api/genres/{id}`  - Fetch a genre (public)
//! - `POST   /api/genres`       - Create a genre (token required)
//! - `DELETE /api/genres/{id}`  - Delete a genre (token + admin required)
//!
//! # Middleware
//!
//! Per-route ordering is fixed: authentication, then authorization, then
//! validation inside the handler, then the persistence call. `route_layer`
//! wraps outside-in, so the authentication layer added last runs first.

use axum::routing::{delete, get, post};
use axum::{Router, middleware};
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{
    create_genre_handler, delete_genre_handler, genre_list_handler, get_genre_handler,
    health_handler,
};
use crate::api::middleware::{auth, require_admin, tracing};
use crate::error;
use crate::state::AppState;

/// Genre routes with their per-route middleware chains applied.
///
/// Split into public, authenticated, and admin groups; the groups merge into
/// one router so each method on a shared path keeps its own chain.
pub fn api_routes(state: AppState) -> Router {
    let public = Router::new()
        .route("/genres", get(genre_list_handler))
        .route("/genres/{id}", get(get_genre_handler));

    let authenticated = Router::new()
        .route("/genres", post(create_genre_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let admin = Router::new()
        .route("/genres/{id}", delete(delete_genre_handler))
        .route_layer(middleware::from_fn(require_admin::layer))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .merge(public)
        .merge(authenticated)
        .merge(admin)
        .with_state(state)
}

/// Constructs the application router with all routes and middleware.
///
/// The catch-panic layer is the outer error boundary: a panicking handler
/// produces a normalized 500 response instead of a dropped connection.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .with_state(state.clone())
        .nest("/api", api_routes(state))
        .layer(tracing::layer())
        .layer(CatchPanicLayer::custom(error::panic_response));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
