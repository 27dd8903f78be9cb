//! HTTP client for the Marquee listing API.
//!
//! Wraps `GET /api/movies` using [`reqwest`]. One attempt per call; no
//! timeout or retry is applied here.

use marquee_core::listing::MoviePage;

use crate::state::PageQuery;

/// Errors from the listing API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, bad body, etc.).
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("API error: {status}")]
    Status { status: u16 },
}

/// HTTP client for one listing API base URL.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for `base_url`, e.g. `http://localhost:4000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of movies.
    ///
    /// `search` is only sent when non-empty.
    pub async fn fetch_page(&self, query: &PageQuery) -> Result<MoviePage, ClientError> {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if !query.search.is_empty() {
            params.push(("search", query.search.clone()));
        }

        tracing::debug!(
            page = query.page,
            limit = query.limit,
            search = %query.search,
            "Fetching movies",
        );

        let response = self
            .client
            .get(format!("{}/api/movies", self.base_url))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Listing request failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<MoviePage>().await?)
    }
}
