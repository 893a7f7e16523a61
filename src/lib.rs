//! # Genre Catalog
//!
//! A small genre catalog REST API with token authentication, built with Axum
//! and PostgreSQL.
//!
//! ## Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Domain Layer** ([`domain`]) - Entities and the storage trait
//! - **Application Layer** ([`application`]) - Token codec and genre service
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL and in-memory storage
//! - **API Layer** ([`api`]) - Handlers, DTOs, and the middleware chain
//!
//! ## Request Pipeline
//!
//! Every route composes a fixed sequence: authentication (where required),
//! authorization (where required), input validation, then the storage call.
//! Each stage either passes the request forward or short-circuits with an
//! [`AppError`]; [`error`] is the single place errors become HTTP responses.
//!
//! ## Authentication
//!
//! Callers present an opaque signed token in the `x-auth-token` header. The
//! token embeds the principal id and admin flag; verification is stateless
//! and touches no storage. Tokens are issued via
//! [`application::services::AuthService::issue_token`] by whatever component
//! manages principals.
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]; a missing
//! `DATABASE_URL` or `TOKEN_SIGNING_SECRET` aborts startup.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod validation;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, GenreService};
    pub use crate::domain::entities::{Genre, IdentityClaims, NewGenre};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
