/// Browser configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Base URL of the listing API (default: `http://localhost:4000`).
    pub api_url: String,
}

impl BrowserConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default                  |
    /// |-------------------|--------------------------|
    /// | `CATALOG_API_URL` | `http://localhost:4000`  |
    pub fn from_env() -> Self {
        Self::from_api_url(std::env::var("CATALOG_API_URL").ok())
    }

    fn from_api_url(raw: Option<String>) -> Self {
        let api_url = raw
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "http://localhost:4000".into());
        Self { api_url }
    }
}
