//! Handlers for the movie catalog listing.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::listing::ListingQuery;

use crate::error::AppResult;
use crate::query::MovieListParams;
use crate::state::AppState;

/// GET /api/movies
///
/// Returns one page of movies (newest first) matching an optional
/// case-insensitive title substring, plus the total match count.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let params = MovieListParams::from_pairs(pairs);
    let query = ListingQuery::from_raw(
        params.page.as_deref(),
        params.limit.as_deref(),
        params.search.as_deref(),
    );

    let page = state.store.list_movies(&query).await?;

    tracing::debug!(
        page = query.page,
        limit = query.limit,
        search = ?query.search,
        total = page.total,
        returned = page.movies.len(),
        "Movies listed",
    );

    Ok(Json(page))
}
