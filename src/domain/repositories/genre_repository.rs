//! Repository trait for genre storage.

use async_trait::async_trait;

use crate::domain::entities::{Genre, NewGenre};
use crate::error::AppError;

/// Storage interface for genre records.
///
/// This is the boundary to the persistence collaborator; everything above it
/// treats storage as simple wrappers around these four operations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgGenreRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryGenreRepository`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Returns all genres, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find(&self) -> Result<Vec<Genre>, AppError>;

    /// Looks up a genre by id. `None` when no record has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>, AppError>;

    /// Inserts a genre and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_genre: NewGenre) -> Result<Genre, AppError>;

    /// Deletes a genre by id, returning the removed record. `None` when no
    /// record had this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_by_id(&self, id: i64) -> Result<Option<Genre>, AppError>;
}
