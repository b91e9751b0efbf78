//! Domain DTOs for the movies API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! `year` is optional everywhere: a year the user typed that is not a number
//! travels as JSON `null`, and the server may hand it back that way.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned movie identifier. Opaque to the client: whatever JSON
/// number or string the server sent is echoed back unchanged, in request
/// bodies and in `/movies/{id}` paths.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Num(u64),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Num(n) => write!(f, "{n}"),
            MovieId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for MovieId {
    fn from(n: u64) -> Self {
        MovieId::Num(n)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        MovieId::Text(s.to_string())
    }
}

/// A single movie record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub year: Option<i64>,
    pub genre: String,
}

/// Request payload for creating a new movie. The id is assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub genre: String,
    pub year: Option<i64>,
}

/// Request payload for replacing an existing movie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieUpdate {
    pub id: MovieId,
    pub title: String,
    pub year: Option<i64>,
    pub genre: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_id_serializes_as_bare_number() {
        let movie = Movie {
            id: MovieId::Num(7),
            title: "Dune".to_string(),
            year: Some(2021),
            genre: "Sci-Fi".to_string(),
        };
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["year"], 2021);
    }

    #[test]
    fn string_id_round_trips_unchanged() {
        let movie: Movie =
            serde_json::from_str(r#"{"id":"a1b2","title":"Dune","year":2021,"genre":"Sci-Fi"}"#).unwrap();
        assert_eq!(movie.id, MovieId::Text("a1b2".to_string()));
        assert_eq!(movie.id.to_string(), "a1b2");
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["id"], "a1b2");
    }

    #[test]
    fn numeric_string_stays_a_string() {
        let id: MovieId = serde_json::from_str(r#""7""#).unwrap();
        assert_eq!(id, MovieId::Text("7".to_string()));
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""7""#);
    }

    #[test]
    fn unparsed_year_is_sent_as_null() {
        let input = NewMovie {
            title: "Nope".to_string(),
            genre: "Drama".to_string(),
            year: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json["year"].is_null());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn movie_without_year_field_deserializes() {
        let movie: Movie = serde_json::from_str(r#"{"id":3,"title":"Her","genre":"Romance"}"#).unwrap();
        assert_eq!(movie.year, None);
    }
}
