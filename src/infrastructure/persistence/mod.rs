//! Repository implementations.

pub mod memory_genre_repository;
pub mod pg_genre_repository;

pub use memory_genre_repository::MemoryGenreRepository;
pub use pg_genre_repository::PgGenreRepository;
