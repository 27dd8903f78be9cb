use std::net::SocketAddr;
use std::sync::Arc;

use marquee_db::{InMemoryMovieStore, MovieStore, PgMovieStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_api::config::{ServerConfig, StoreSource};
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee_api=debug,marquee_db=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Movie store ---
    let store = connect_store(&config).await;

    // --- App state ---
    let state = AppState { store };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Open the configured movie store, exiting the process if it is missing or
/// unreachable. The server never starts without a working store.
async fn connect_store(config: &ServerConfig) -> Arc<dyn MovieStore> {
    match &config.store {
        Some(StoreSource::Postgres(url)) => {
            let pool = marquee_db::create_pool(url, config.db_max_connections)
                .await
                .unwrap_or_else(|e| {
                    tracing::error!(error = %e, "Failed to connect to database, is DATABASE_URL correct?");
                    std::process::exit(1);
                });
            tracing::info!("Database connection pool created");

            if let Err(e) = marquee_db::health_check(&pool).await {
                tracing::error!(error = %e, "Database health check failed");
                std::process::exit(1);
            }
            tracing::info!("Database health check passed");

            Arc::new(PgMovieStore::new(pool))
        }
        Some(StoreSource::Fixture(path)) => {
            let store = InMemoryMovieStore::from_json_file(path).unwrap_or_else(|e| {
                tracing::error!(error = %e, "Failed to load movie fixture");
                std::process::exit(1);
            });
            Arc::new(store)
        }
        None => {
            tracing::error!("Either DATABASE_URL or MOVIES_FIXTURE must be set");
            std::process::exit(1);
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
