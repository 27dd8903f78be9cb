//! Listing query normalization and the paginated result envelope.
//!
//! Lives in `core` so the API server, the store implementations, and the
//! terminal browser all agree on how `page`/`limit`/`search` are interpreted.

use serde::{Deserialize, Serialize};

use crate::movie::Movie;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Page used when the request omits `page` or sends something unusable.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the request omits `limit` or sends something unusable.
pub const DEFAULT_LIMIT: i64 = 10;

// ---------------------------------------------------------------------------
// Parameter parsing
// ---------------------------------------------------------------------------

/// Read the integer prefix of `raw`.
///
/// Leading whitespace is skipped, one `+`/`-` sign is accepted, and parsing
/// stops at the first non-digit. Returns `None` when no digit follows.
/// Values beyond the `i64` range saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { value.saturating_neg() } else { value })
}

/// Parse a positive integer parameter, falling back to `default` when the
/// value is absent, has no integer prefix, or is not positive.
pub fn positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(parse_leading_int)
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

/// Number of pages needed for `total` records at `page_size` per page.
///
/// A non-positive page size is treated as 1.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    let size = page_size.max(1);
    let total = total.max(0);
    total / size + i64::from(total % size != 0)
}

// ---------------------------------------------------------------------------
// Normalized query
// ---------------------------------------------------------------------------

/// A fully normalized listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// 1-based page number, always >= 1.
    pub page: i64,
    /// Page size, always >= 1.
    pub limit: i64,
    /// Trimmed, non-empty title filter.
    pub search: Option<String>,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            search: None,
        }
    }
}

impl ListingQuery {
    /// Build a query from raw request parameters.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>, search: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            page: positive_or(page, DEFAULT_PAGE),
            limit: positive_or(limit, DEFAULT_LIMIT),
            search,
        }
    }

    /// Number of matching records to skip before this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Case-insensitive substring match of the title against the filter.
    /// Always true when there is no filter.
    pub fn matches_title(&self, title: &str) -> bool {
        match &self.search {
            Some(needle) => title.to_lowercase().contains(&needle.to_lowercase()),
            None => true,
        }
    }
}

// ---------------------------------------------------------------------------
// Result envelope
// ---------------------------------------------------------------------------

/// One page of listing results, exactly as served by `GET /api/movies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    /// Count of all records matching the filter, ignoring pagination.
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub movies: Vec<Movie>,
}

impl MoviePage {
    /// Total number of pages for this result at its own page size.
    pub fn total_pages(&self) -> i64 {
        total_pages(self.total, self.limit)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- parse_leading_int ---------------------------------------------------

    #[test]
    fn leading_int_plain() {
        assert_eq!(parse_leading_int("42"), Some(42));
    }

    #[test]
    fn leading_int_stops_at_first_non_digit() {
        assert_eq!(parse_leading_int("3abc"), Some(3));
        assert_eq!(parse_leading_int("2.7"), Some(2));
    }

    #[test]
    fn leading_int_accepts_sign_and_whitespace() {
        assert_eq!(parse_leading_int("  +7"), Some(7));
        assert_eq!(parse_leading_int("-5"), Some(-5));
    }

    #[test]
    fn leading_int_without_digits_is_none() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn leading_int_saturates() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    // -- positive_or ---------------------------------------------------------

    #[test]
    fn positive_or_defaults_for_missing_zero_negative_garbage() {
        assert_eq!(positive_or(None, 10), 10);
        assert_eq!(positive_or(Some("0"), 10), 10);
        assert_eq!(positive_or(Some("-3"), 10), 10);
        assert_eq!(positive_or(Some("ten"), 10), 10);
    }

    #[test]
    fn positive_or_passes_through_valid_value() {
        assert_eq!(positive_or(Some("25"), 10), 25);
    }

    // -- ListingQuery ----------------------------------------------------------

    #[test]
    fn from_raw_applies_defaults() {
        let q = ListingQuery::from_raw(None, None, None);
        assert_eq!(q, ListingQuery::default());
    }

    #[test]
    fn from_raw_trims_search_and_drops_blank() {
        let q = ListingQuery::from_raw(Some("2"), Some("25"), Some("  matrix "));
        assert_eq!(q.search.as_deref(), Some("matrix"));

        let blank = ListingQuery::from_raw(None, None, Some("   "));
        assert_eq!(blank.search, None);
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        let q = ListingQuery::from_raw(Some("3"), Some("10"), None);
        assert_eq!(q.offset(), 20);
        assert_eq!(ListingQuery::default().offset(), 0);
    }

    #[test]
    fn offset_saturates_for_huge_pages() {
        let q = ListingQuery::from_raw(Some("99999999999999999999"), Some("100"), None);
        assert_eq!(q.offset(), i64::MAX);
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let q = ListingQuery::from_raw(None, None, Some("GODFATH"));
        assert!(q.matches_title("The Godfather"));
        assert!(q.matches_title("The Godfather: Part II"));
        assert!(!q.matches_title("Goodfellas"));
    }

    #[test]
    fn no_filter_matches_everything() {
        assert!(ListingQuery::default().matches_title("anything"));
    }

    // -- total_pages -----------------------------------------------------------

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn total_pages_zero_when_empty() {
        assert_eq!(total_pages(0, 10), 0);
    }
}
