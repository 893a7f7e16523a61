pub mod auth_service;
pub mod genre_service;

pub use auth_service::{AuthService, TokenError};
pub use genre_service::GenreService;
