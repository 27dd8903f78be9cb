use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Movie catalog routes, merged into `/api`.
///
/// ```text
/// GET /movies   -> list_movies
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/movies", get(movies::list_movies))
}
