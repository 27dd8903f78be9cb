//! Query parameter types for API handlers.

/// Raw `?page=&limit=&search=` parameters for the movie listing.
///
/// Kept as strings so malformed numbers fall back to defaults instead of
/// being rejected; see [`marquee_core::listing::ListingQuery::from_raw`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MovieListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

impl MovieListParams {
    /// Collect the listing parameters from decoded query pairs.
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "search" => &mut params.search,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}
