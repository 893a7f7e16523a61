//! Genre catalog service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Genre, NewGenre};
use crate::domain::repositories::GenreRepository;
use crate::error::AppError;

/// Thin orchestration layer over genre storage.
///
/// Input validation happens in the request pipeline before these methods are
/// called; this service only maps absent records to not-found errors.
pub struct GenreService {
    repository: Arc<dyn GenreRepository>,
}

impl GenreService {
    /// Creates a new genre service.
    pub fn new(repository: Arc<dyn GenreRepository>) -> Self {
        Self { repository }
    }

    /// Returns all genres, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_genres(&self) -> Result<Vec<Genre>, AppError> {
        self.repository.find().await
    }

    /// Retrieves a genre by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no genre has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_genre(&self, id: i64) -> Result<Genre, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                "The genre with the given ID was not found.",
                json!({ "id": id }),
            )
        })
    }

    /// Creates a genre with the given (already validated) name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_genre(&self, name: String) -> Result<Genre, AppError> {
        self.repository.insert(NewGenre { name }).await
    }

    /// Removes a genre by id, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no genre has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn remove_genre(&self, id: i64) -> Result<Genre, AppError> {
        self.repository.delete_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                "The genre with the given ID was not found.",
                json!({ "id": id }),
            )
        })
    }
}
