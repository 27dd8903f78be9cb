use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use marquee_db::StoreError;
use serde_json::json;

/// Message returned to clients for every server-side failure. Details are
/// logged, never sent.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core` (e.g. an undecodable document).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(e) => AppError::Database(e),
            StoreError::Document(e) => AppError::Core(e),
            other @ StoreError::Fixture { .. } => AppError::InternalError(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = match &self {
            AppError::Core(err) => {
                tracing::error!(error = %err, "Catalog document error");
                "DOCUMENT_ERROR"
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                "DATABASE_ERROR"
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                "INTERNAL_ERROR"
            }
        };

        let body = json!({
            "error": INTERNAL_ERROR_MESSAGE,
            "code": code,
        });

        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
