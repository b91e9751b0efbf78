//! Case-insensitive search over the cached collection.

use crate::types::Movie;

/// Returns the movies whose title or genre contains `query`, ignoring case,
/// in cache order. An empty query matches everything.
pub fn filter_movies<'a>(movies: &'a [Movie], query: &str) -> Vec<&'a Movie> {
    let needle = query.to_lowercase();
    movies.iter().filter(|movie| matches(movie, &needle)).collect()
}

/// `needle` must already be lowercased.
fn matches(movie: &Movie, needle: &str) -> bool {
    movie.title.to_lowercase().contains(needle) || movie.genre.to_lowercase().contains(needle)
}
