use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub year: Option<i64>,
    pub genre: String,
}

#[derive(Deserialize)]
pub struct NewMovie {
    pub title: String,
    #[serde(default)]
    pub year: Option<i64>,
    pub genre: String,
}

/// Full replacement. A body `id`, if any, is ignored in favour of the path.
#[derive(Deserialize)]
pub struct ReplaceMovie {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub year: Option<i64>,
    pub genre: String,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    movies: BTreeMap<u64, Movie>,
}

impl Store {
    fn insert(&mut self, title: String, year: Option<i64>, genre: String) -> Movie {
        self.next_id += 1;
        let movie = Movie {
            id: self.next_id,
            title,
            year,
            genre,
        };
        self.movies.insert(movie.id, movie.clone());
        movie
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router pre-loaded with `movies`. New ids continue after the largest seed id.
pub fn app_with(movies: Vec<Movie>) -> Router {
    let mut store = Store::default();
    for movie in movies {
        store.next_id = store.next_id.max(movie.id);
        store.movies.insert(movie.id, movie);
    }
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/{id}", get(get_movie).put(update_movie).delete(delete_movie))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn list_movies(State(db): State<Db>) -> Json<Vec<Movie>> {
    let store = db.read().await;
    Json(store.movies.values().cloned().collect())
}

async fn create_movie(
    State(db): State<Db>,
    Json(input): Json<NewMovie>,
) -> (StatusCode, Json<Movie>) {
    let movie = db.write().await.insert(input.title, input.year, input.genre);
    tracing::debug!(id = movie.id, "created movie");
    (StatusCode::CREATED, Json(movie))
}

async fn get_movie(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Movie>, StatusCode> {
    let store = db.read().await;
    store.movies.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_movie(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<ReplaceMovie>,
) -> Result<Json<Movie>, StatusCode> {
    let mut store = db.write().await;
    let movie = store.movies.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if input.id.is_some_and(|body_id| body_id != id) {
        tracing::warn!(id, body_id = ?input.id, "body id differs from path, using path");
    }
    movie.title = input.title;
    movie.year = input.year;
    movie.genre = input.genre;
    Ok(Json(movie.clone()))
}

async fn delete_movie(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.movies.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}
