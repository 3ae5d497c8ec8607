use serde::Deserialize;

/// Payload for creating or replacing a director. The primary key is never
/// client-suppliable; a stray `id` field in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct DirectorInput {
    pub name: String,
}

/// Payload for creating or replacing a genre.
#[derive(Debug, Deserialize)]
pub struct GenreInput {
    pub name: String,
}

/// Query parameters for the movie listing. Carried as raw strings so the
/// handler can reject non-integer values with a 400 instead of silently
/// matching nothing.
#[derive(Debug, Deserialize)]
pub struct MovieListQuery {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}
