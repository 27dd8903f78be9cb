use std::path::PathBuf;

/// Where the movie catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSource {
    /// PostgreSQL connection URL.
    Postgres(String),
    /// JSON array of movie documents held in memory.
    Fixture(PathBuf),
}

/// Server configuration loaded from environment variables.
///
/// All fields except the store source have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum PostgreSQL pool size (default: `20`).
    pub db_max_connections: u32,
    /// Catalog backend. `None` when neither `DATABASE_URL` nor
    /// `MOVIES_FIXTURE` is set.
    pub store: Option<StoreSource>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `4000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `DATABASE_URL`         | --                         |
    /// | `MOVIES_FIXTURE`       | --                         |
    ///
    /// `DATABASE_URL` takes precedence over `MOVIES_FIXTURE`.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let store = resolve_store(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("MOVIES_FIXTURE").ok(),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            store,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn resolve_store(database_url: Option<String>, fixture: Option<String>) -> Option<StoreSource> {
    let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

    match (non_empty(database_url), non_empty(fixture)) {
        (Some(url), _) => Some(StoreSource::Postgres(url)),
        (None, Some(path)) => Some(StoreSource::Fixture(PathBuf::from(path))),
        (None, None) => None,
    }
}
