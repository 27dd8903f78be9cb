#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use marquee_core::listing::{ListingQuery, MoviePage};
use marquee_db::{InMemoryMovieStore, MovieStore, StoreError};
use serde_json::{json, Value};
use tower::ServiceExt;

use marquee_api::config::ServerConfig;
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
        store: None,
    }
}

/// Build the full application router over the given store, through the same
/// builder `main.rs` uses.
pub fn build_test_app(store: Arc<dyn MovieStore>) -> Router {
    build_app_router(AppState { store }, &test_config())
}

/// The full router over the 21-movie fixture.
pub fn fixture_app() -> Router {
    build_test_app(Arc::new(fixture_store()))
}

/// Twenty-one movies with ids `m01`..`m21`. Sorted by year descending and id
/// ascending, the order is:
///
/// ```text
/// m04 m05 m21 m19 m20 m17 m18 m03 m16 m06 | m07 m15 m14 m09 m10 m08 m12 m13 m11 m02 | m01
/// ```
pub fn fixture_store() -> InMemoryMovieStore {
    let movies = [
        ("m01", "The Godfather", json!(1972)),
        ("m02", "The Godfather: Part II", json!(1974)),
        ("m03", "The Matrix", json!(1999)),
        ("m04", "The Matrix Reloaded", json!(2003)),
        ("m05", "The Matrix Revolutions", json!(2003)),
        ("m06", "Heat", json!(1995)),
        ("m07", "Casino", json!(1995)),
        ("m08", "Alien", json!(1979)),
        ("m09", "Aliens", json!(1986)),
        ("m10", "Blade Runner", json!(1982)),
        ("m11", "Jaws", json!(1975)),
        ("m12", "Rocky", json!(1976)),
        ("m13", "Taxi Driver", json!(1976)),
        ("m14", "Goodfellas", json!(1990)),
        ("m15", "Pulp Fiction", json!(1994)),
        ("m16", "Fight Club", json!(1999)),
        ("m17", "Memento", json!("2000è")),
        ("m18", "Gladiator", json!(2000)),
        ("m19", "Amélie", json!(2001)),
        ("m20", "Spirited Away", json!(2001)),
        ("m21", "Oldboy", json!(2003)),
    ];

    let documents = movies
        .into_iter()
        .map(|(id, title, year)| {
            json!({
                "_id": { "$oid": id },
                "title": title,
                "year": year,
                "plot": format!("Plot of {title}."),
                "genres": ["Drama"],
                "plot_embedding": [0.12, -0.4, 0.88],
                "plot_embedding_voyage_3_large": [0.3, 0.1],
            })
        })
        .collect();

    InMemoryMovieStore::from_documents(documents).expect("fixture documents are valid")
}

/// A store whose every call fails like an unreachable database.
pub struct FailingStore;

#[async_trait]
impl MovieStore for FailingStore {
    async fn list_movies(&self, _query: &ListingQuery) -> Result<MoviePage, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// GET a listing URI and return the parsed JSON body, asserting 200.
pub async fn list(uri: &str) -> Value {
    let response = get(fixture_app(), uri).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK, "GET {uri}");
    body_json(response).await
}

/// The `_id`s of the movies in a listing body, in order.
pub fn ids(body: &Value) -> Vec<String> {
    body["movies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["_id"].as_str().unwrap().to_string())
        .collect()
}
