//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::{AuthService, GenreService};

/// Read-only state shared across requests.
///
/// Constructed once at startup; nothing here is mutated per request. The
/// signing secret lives inside [`AuthService`].
#[derive(Clone)]
pub struct AppState {
    pub genre_service: Arc<GenreService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(genre_service: Arc<GenreService>, auth_service: Arc<AuthService>) -> Self {
        Self {
            genre_service,
            auth_service,
        }
    }
}
