//! The [`MovieStore`] seam between request handlers and the catalog.

use async_trait::async_trait;
use marquee_core::error::CoreError;
use marquee_core::listing::{ListingQuery, MoviePage};
use marquee_core::movie::Movie;
use sqlx::PgPool;

use crate::repositories::MovieRepo;

/// Errors from any catalog backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database was unreachable or rejected the query.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document could not be turned into a [`Movie`].
    #[error(transparent)]
    Document(#[from] CoreError),

    /// A fixture file could not be read or parsed.
    #[error("Fixture {path} could not be loaded: {reason}")]
    Fixture { path: String, reason: String },
}

/// Read-only access to the movie catalog.
///
/// Implementations are shared across request handlers behind an `Arc`, so
/// they must be `Send + Sync` and hold no per-request state.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Count and fetch one page of movies for `query`.
    async fn list_movies(&self, query: &ListingQuery) -> Result<MoviePage, StoreError>;

    /// Confirm the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// PostgreSQL-backed catalog.
pub struct PgMovieStore {
    pool: PgPool,
}

impl PgMovieStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn list_movies(&self, query: &ListingQuery) -> Result<MoviePage, StoreError> {
        let total = MovieRepo::count(&self.pool, query).await?;
        let rows = MovieRepo::list_page(&self.pool, query).await?;

        let movies = rows
            .into_iter()
            .map(Movie::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MoviePage {
            total,
            page: query.page,
            limit: query.limit,
            movies,
        })
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
