//! Genre entity for the media catalog.

/// A catalog genre.
///
/// The name invariant (5 to 50 characters) is enforced by request validation
/// before any storage access; entities read back from storage are assumed to
/// already satisfy it.
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Input data for creating a genre. The id is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewGenre {
    pub name: String,
}
