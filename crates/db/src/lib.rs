//! Data access for the movie catalog.
//!
//! The catalog is owned by an external ingestion pipeline; this crate only
//! reads it. [`MovieStore`] is the seam the API depends on, with a
//! PostgreSQL implementation ([`PgMovieStore`]) and an in-memory one loaded
//! from a JSON fixture ([`InMemoryMovieStore`]).

use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use memory::InMemoryMovieStore;
pub use store::{MovieStore, PgMovieStore, StoreError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
