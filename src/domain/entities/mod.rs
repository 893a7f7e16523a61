pub mod claims;
pub mod genre;

pub use claims::IdentityClaims;
pub use genre::{Genre, NewGenre};
