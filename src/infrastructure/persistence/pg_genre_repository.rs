//! PostgreSQL implementation of the genre repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{Genre, NewGenre};
use crate::domain::repositories::GenreRepository;
use crate::error::AppError;

/// PostgreSQL repository for genre records.
///
/// Ids are `BIGSERIAL`, so every identifier is a positive `i64` — the format
/// the path-id validation rule checks against.
pub struct PgGenreRepository {
    pool: Arc<PgPool>,
}

impl PgGenreRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GenreRow {
    id: i64,
    name: String,
}

impl From<GenreRow> for Genre {
    fn from(row: GenreRow) -> Self {
        Genre {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    async fn find(&self) -> Result<Vec<Genre>, AppError> {
        let rows: Vec<GenreRow> = sqlx::query_as("SELECT id, name FROM genres ORDER BY name")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>, AppError> {
        let row: Option<GenreRow> = sqlx::query_as("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Genre::from))
    }

    async fn insert(&self, new_genre: NewGenre) -> Result<Genre, AppError> {
        let row: GenreRow =
            sqlx::query_as("INSERT INTO genres (name) VALUES ($1) RETURNING id, name")
                .bind(new_genre.name)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Genre>, AppError> {
        let row: Option<GenreRow> =
            sqlx::query_as("DELETE FROM genres WHERE id = $1 RETURNING id, name")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Genre::from))
    }
}
