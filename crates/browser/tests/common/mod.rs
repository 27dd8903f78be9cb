#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use marquee_api::config::ServerConfig;
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_core::listing::{ListingQuery, MoviePage};
use marquee_db::{InMemoryMovieStore, MovieStore, StoreError};
use serde_json::json;

/// Serve the real listing API on an ephemeral local port and return its
/// base URL.
pub async fn spawn_api(store: Arc<dyn MovieStore>) -> String {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
        store: None,
    };
    let app = build_app_router(AppState { store }, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Twelve movies, newest first: two pages at the default page size.
pub fn catalog() -> Arc<dyn MovieStore> {
    let movies = [
        ("m01", "The Godfather", 1972),
        ("m02", "The Godfather: Part II", 1974),
        ("m03", "The Matrix", 1999),
        ("m04", "Heat", 1995),
        ("m05", "Alien", 1979),
        ("m06", "Aliens", 1986),
        ("m07", "Blade Runner", 1982),
        ("m08", "Jaws", 1975),
        ("m09", "Goodfellas", 1990),
        ("m10", "Pulp Fiction", 1994),
        ("m11", "Fight Club", 1999),
        ("m12", "Gladiator", 2000),
    ];

    let documents = movies
        .into_iter()
        .map(|(id, title, year)| {
            json!({
                "_id": id,
                "title": title,
                "year": year,
                "directors": ["Someone"],
                "plot_embedding": [0.1, 0.2],
            })
        })
        .collect();

    Arc::new(InMemoryMovieStore::from_documents(documents).unwrap())
}

/// A store that fails every call.
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
