//! In-process implementation of the genre repository.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Genre, NewGenre};
use crate::domain::repositories::GenreRepository;
use crate::error::AppError;

/// Genre store backed by process memory.
///
/// Implements the same contract as the PostgreSQL repository, including the
/// positive-integer id format. Backs the integration test suite; contents
/// are lost on shutdown.
pub struct MemoryGenreRepository {
    genres: RwLock<Vec<Genre>>,
    next_id: AtomicI64,
}

impl MemoryGenreRepository {
    pub fn new() -> Self {
        Self {
            genres: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryGenreRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenreRepository for MemoryGenreRepository {
    async fn find(&self) -> Result<Vec<Genre>, AppError> {
        let mut genres = self.genres.read().await.clone();
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>, AppError> {
        let genres = self.genres.read().await;
        Ok(genres.iter().find(|genre| genre.id == id).cloned())
    }

    async fn insert(&self, new_genre: NewGenre) -> Result<Genre, AppError> {
        let genre = Genre {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: new_genre.name,
        };

        self.genres.write().await.push(genre.clone());
        Ok(genre)
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Genre>, AppError> {
        let mut genres = self.genres.write().await;
        let position = genres.iter().position(|genre| genre.id == id);
        Ok(position.map(|index| genres.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = MemoryGenreRepository::new();

        let first = repo
            .insert(NewGenre {
                name: "first".to_string(),
            })
            .await
            .unwrap();
        let second = repo
            .insert(NewGenre {
                name: "second".to_string(),
            })
            .await
            .unwrap();

        assert!(second.id > first.id);
        assert!(first.id > 0);
    }

    #[tokio::test]
    async fn test_find_returns_sorted_by_name() {
        let repo = MemoryGenreRepository::new();

        for name in ["zebra", "alpha", "middle"] {
            repo.insert(NewGenre {
                name: name.to_string(),
            })
            .await
            .unwrap();
        }

        let names: Vec<String> = repo
            .find()
            .await
            .unwrap()
            .into_iter()
            .map(|genre| genre.name)
            .collect();

        assert_eq!(names, ["alpha", "middle", "zebra"]);
    }

    #[tokio::test]
    async fn test_delete_removes_and_returns_record() {
        let repo = MemoryGenreRepository::new();
        let genre = repo
            .insert(NewGenre {
                name: "gone-soon".to_string(),
            })
            .await
            .unwrap();

        let removed = repo.delete_by_id(genre.id).await.unwrap();

        assert_eq!(removed, Some(genre.clone()));
        assert_eq!(repo.find_by_id(genre.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_absent_returns_none() {
        let repo = MemoryGenreRepository::new();

        assert_eq!(repo.delete_by_id(99).await.unwrap(), None);
    }
}
