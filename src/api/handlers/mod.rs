//! HTTP request handlers for API endpoints.

pub mod genres;
pub mod health;

pub use genres::{create_genre_handler, delete_genre_handler, genre_list_handler, get_genre_handler};
pub use health::health_handler;
