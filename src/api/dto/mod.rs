//! Request and response DTOs.

pub mod genre;
pub mod health;
