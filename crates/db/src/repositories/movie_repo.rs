//! Repository for the `movies` table.
//!
//! The table is populated by external ingestion. Each row keeps the raw
//! document in `document` (JSONB) with `title` and `year` lifted into
//! columns for filtering and ordering. The columns are authoritative: the
//! served title and year are the column values, so a record always sorts
//! and matches on what the client sees.

use marquee_core::listing::ListingQuery;
use marquee_core::movie::EMBEDDING_FIELDS;
use sqlx::PgPool;

use crate::models::movie::MovieRow;

/// Title filter shared by the count and page queries. `$1` is the search
/// text, or NULL for no filter. `strpos` keeps the match a literal substring
/// so `%` and `_` in user input are not treated as wildcards.
const TITLE_FILTER: &str = "($1::TEXT IS NULL OR strpos(lower(title), lower($1)) > 0)";

/// Provides read access to the movie catalog.
pub struct MovieRepo;

impl MovieRepo {
    /// Count movies matching the query's title filter, ignoring pagination.
    pub async fn count(pool: &PgPool, query: &ListingQuery) -> Result<i64, sqlx::Error> {
        let sql = format!("SELECT COUNT(*) FROM movies WHERE {TITLE_FILTER}");
        sqlx::query_scalar::<_, i64>(&sql)
            .bind(query.search.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Fetch one page of matching movies, newest first.
    ///
    /// Ties on year are broken by id so paging is deterministic; movies
    /// without a year sort after all dated ones. Embedding fields are
    /// removed from the document inside the query so they never leave the
    /// database.
    pub async fn list_page(pool: &PgPool, query: &ListingQuery) -> Result<Vec<MovieRow>, sqlx::Error> {
        let sql = format!(
            "SELECT id, title, year, document - $2::TEXT[] AS document \
             FROM movies \
             WHERE {TITLE_FILTER} \
             ORDER BY year DESC NULLS LAST, id ASC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, MovieRow>(&sql)
            .bind(query.search.as_deref())
            .bind(EMBEDDING_FIELDS)
            .bind(query.limit)
            .bind(query.offset())
            .fetch_all(pool)
            .await
    }
}
