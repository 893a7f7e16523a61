//! Handlers for genre endpoints.
//!
//! Each route composes a fixed sequence: authentication (where required,
//! wired in [`crate::routes`]), then authorization, then input validation,
//! then the persistence call. Validation failures never reach storage.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::genre::{CreateGenreRequest, GenreItem};
use crate::error::AppError;
use crate::state::AppState;
use crate::validation;

/// Lists all genres, sorted by name.
///
/// # Endpoint
///
/// `GET /api/genres` — public.
pub async fn genre_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<GenreItem>>, AppError> {
    let genres = state.genre_service.list_genres().await?;

    Ok(Json(genres.into_iter().map(GenreItem::from).collect()))
}

/// Fetches a single genre by id.
///
/// # Endpoint
///
/// `GET /api/genres/{id}` — public.
///
/// # Errors
///
/// Returns 404 for a malformed id as well as for an absent record; the two
/// are indistinguishable to the caller.
pub async fn get_genre_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<GenreItem>, AppError> {
    let id = validation::parse_id(&id)?;

    let genre = state.genre_service.get_genre(id).await?;

    Ok(Json(genre.into()))
}

/// Creates a genre.
///
/// # Endpoint
///
/// `POST /api/genres` — requires authentication.
///
/// # Errors
///
/// Returns 400 when the name is missing or outside 5..=50 characters.
pub async fn create_genre_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateGenreRequest>,
) -> Result<Json<GenreItem>, AppError> {
    let name = payload.validate()?.to_string();

    let genre = state.genre_service.create_genre(name).await?;

    Ok(Json(genre.into()))
}

/// Deletes a genre by id, returning the removed record.
///
/// # Endpoint
///
/// `DELETE /api/genres/{id}` — requires authentication and the admin flag.
/// Authorization runs before id validation, so a non-admin gets 403 even
/// for ids that do not exist.
///
/// # Errors
///
/// Returns 404 for a malformed id or an absent record.
pub async fn delete_genre_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<GenreItem>, AppError> {
    let id = validation::parse_id(&id)?;

    let genre = state.genre_service.remove_genre(id).await?;

    Ok(Json(genre.into()))
}
