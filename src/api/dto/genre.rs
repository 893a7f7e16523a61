//! DTOs for genre endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Genre;
use crate::error::AppError;
use crate::validation::field;

/// Individual genre as returned to clients.
#[derive(Debug, Serialize)]
pub struct GenreItem {
    pub id: i64,
    pub name: String,
}

impl From<Genre> for GenreItem {
    fn from(genre: Genre) -> Self {
        GenreItem {
            id: genre.id,
            name: genre.name,
        }
    }
}

/// Request body for creating a genre.
///
/// `name` is optional at the serde layer so a missing field is reported by
/// the validation rules rather than as a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateGenreRequest {
    pub name: Option<String>,
}

impl CreateGenreRequest {
    /// Runs the body rules and returns the validated genre name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] describing the first broken rule:
    /// name must be present, at least 5 and at most 50 characters.
    pub fn validate(&self) -> Result<&str, AppError> {
        Ok(field("name", self.name.as_deref())
            .required()?
            .min_len(5)?
            .max_len(50)?
            .value)
    }
}
