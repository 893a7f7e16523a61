#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use axum::routing::get;
use axum_test::TestServer;

use genre_catalog::api::handlers::health_handler;
use genre_catalog::api::middleware::auth::AUTH_HEADER;
use genre_catalog::application::services::{AuthService, GenreService};
use genre_catalog::domain::entities::{Genre, IdentityClaims};
use genre_catalog::infrastructure::persistence::MemoryGenreRepository;
use genre_catalog::routes::api_routes;
use genre_catalog::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn create_test_state() -> AppState {
    let repository = Arc::new(MemoryGenreRepository::new());
    let genre_service = Arc::new(GenreService::new(repository));
    let auth_service = Arc::new(AuthService::new(TEST_SECRET.to_string()));

    AppState::new(genre_service, auth_service)
}

/// Builds a test server over the real router, middleware chain included.
pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state.clone())
        .nest("/api", api_routes(state));

    TestServer::new(app).unwrap()
}

pub fn issue_token(state: &AppState, is_admin: bool) -> String {
    state
        .auth_service
        .issue_token(&IdentityClaims::new("user-1", is_admin))
}

pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(AUTH_HEADER),
        HeaderValue::from_str(token).unwrap(),
    )
}

pub async fn seed_genre(state: &AppState, name: &str) -> Genre {
    state
        .genre_service
        .create_genre(name.to_string())
        .await
        .unwrap()
}
