//! Client-side copy of the server's movie collection.

use crate::types::{Movie, MovieId};

/// Fully replaceable snapshot of the last successful list fetch.
///
/// The server owns the truth; this is only ever swapped wholesale via
/// [`MovieCache::replace_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieCache {
    movies: Vec<Movie>,
}

impl MovieCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.iter().find(|m| &m.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
