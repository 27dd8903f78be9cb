use std::sync::Arc;

use marquee_db::MovieStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Read-only movie catalog, shared by every request.
    pub store: Arc<dyn MovieStore>,
}
