//! In-memory catalog loaded from a JSON fixture.
//!
//! Used for local development without PostgreSQL and as the backing store in
//! API and browser integration tests. Ordering and filtering match
//! [`MovieRepo`](crate::repositories::MovieRepo).

use std::cmp::Reverse;
use std::path::Path;

use async_trait::async_trait;
use marquee_core::listing::{ListingQuery, MoviePage};
use marquee_core::movie::Movie;

use crate::store::{MovieStore, StoreError};

/// A fixed, pre-sorted set of movies held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMovieStore {
    movies: Vec<Movie>,
}

impl InMemoryMovieStore {
    /// Build a store from decoded movies. Sorted once here: year descending
    /// with undated movies last, then id ascending.
    pub fn new(mut movies: Vec<Movie>) -> Self {
        movies.sort_by(|a, b| {
            (a.year.is_none(), Reverse(a.year))
                .cmp(&(b.year.is_none(), Reverse(b.year)))
                .then_with(|| a.id.cmp(&b.id))
        });
        Self { movies }
    }

    /// Build a store from raw documents, each carrying its own `_id`.
    pub fn from_documents(documents: Vec<serde_json::Value>) -> Result<Self, StoreError> {
        let movies = documents
            .into_iter()
            .map(|doc| Movie::from_document(None, doc))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(movies))
    }

    /// Load a JSON array of movie documents from `path`.
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let fixture_error = |reason: String| StoreError::Fixture {
            path: path.display().to_string(),
            reason,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| fixture_error(e.to_string()))?;
        let documents: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(|e| fixture_error(e.to_string()))?;

        let store = Self::from_documents(documents)?;
        tracing::info!(path = %path.display(), count = store.len(), "Loaded movie fixture");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn list_movies(&self, query: &ListingQuery) -> Result<MoviePage, StoreError> {
        let matching: Vec<&Movie> = self
            .movies
            .iter()
            .filter(|m| query.matches_title(&m.title))
            .collect();

        let skip = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(query.limit).unwrap_or(usize::MAX);

        let movies = matching.iter().skip(skip).take(take).map(|m| (*m).clone()).collect();

        Ok(MoviePage {
            total: matching.len() as i64,
            page: query.page,
            limit: query.limit,
            movies,
        })
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
