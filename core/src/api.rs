//! Stateless HTTP request builder and response parser for the movies API.
//!
//! # Design
//! `MovieApi` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping this layer
//! deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Movie, MovieId, MovieUpdate, NewMovie};

/// Synchronous, stateless client for the `/movies` resource.
#[derive(Debug, Clone)]
pub struct MovieApi {
    base_url: String,
}

impl MovieApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_movies(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/movies", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_movie(&self, input: &NewMovie) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/movies", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update_movie(&self, id: &MovieId, input: &MovieUpdate) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/movies/{id}", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_movie(&self, id: &MovieId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/movies/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_movies(&self, response: HttpResponse) -> Result<Vec<Movie>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_movie(&self, response: HttpResponse) -> Result<Movie, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_update_movie(&self, response: HttpResponse) -> Result<Movie, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// The delete response body is ignored; any 2xx counts.
    pub fn parse_delete_movie(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)?;
        Ok(())
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> MovieApi {
        MovieApi::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_movies_produces_correct_request() {
        let req = api().build_list_movies();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/movies");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_movie_omits_id() {
        let input = NewMovie {
            title: "Nope".to_string(),
            genre: "Drama".to_string(),
            year: Some(2022),
        };
        let req = api().build_create_movie(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/movies");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Nope", "genre": "Drama", "year": 2022}));
    }

    #[test]
    fn build_update_movie_targets_movie_path_and_carries_id() {
        let input = MovieUpdate {
            id: MovieId::Num(2),
            title: "Her".to_string(),
            year: Some(2013),
            genre: "Drama".to_string(),
        };
        let req = api().build_update_movie(&MovieId::Num(2), &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/movies/2");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 2);
        assert_eq!(body["genre"], "Drama");
    }

    #[test]
    fn build_delete_movie_produces_correct_request() {
        let req = api().build_delete_movie(&MovieId::Num(9));
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/movies/9");
        assert!(req.body.is_none());
    }

    #[test]
    fn string_id_lands_in_path_verbatim() {
        let id = MovieId::from("a1b2");
        assert_eq!(api().build_delete_movie(&id).path, "http://localhost:3000/movies/a1b2");
    }

    #[test]
    fn parse_list_movies_success() {
        let body = r#"[{"id":1,"title":"Dune","year":2021,"genre":"Sci-Fi"}]"#;
        let movies = api().parse_list_movies(response(200, body)).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, MovieId::Num(1));
        assert_eq!(movies[0].title, "Dune");
    }

    #[test]
    fn parse_list_movies_rejects_error_status() {
        let err = api().parse_list_movies(response(503, "down")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 503, .. }));
    }

    #[test]
    fn parse_list_movies_bad_json() {
        let err = api().parse_list_movies(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_create_movie_accepts_200_and_201() {
        let body = r#"{"id":5,"title":"Nope","year":2022,"genre":"Horror"}"#;
        assert_eq!(api().parse_create_movie(response(201, body)).unwrap().id, MovieId::Num(5));
        assert_eq!(api().parse_create_movie(response(200, body)).unwrap().id, MovieId::Num(5));
    }

    #[test]
    fn parse_update_movie_not_found() {
        let err = api().parse_update_movie(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_movie_ignores_body() {
        assert!(api().parse_delete_movie(response(204, "")).is_ok());
        assert!(api().parse_delete_movie(response(200, "{}")).is_ok());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let api = MovieApi::new("http://localhost:3000/");
        assert_eq!(api.build_list_movies().path, "http://localhost:3000/movies");
    }
}
