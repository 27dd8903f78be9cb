//! Request handlers.
//!
//! Handlers normalize request input, delegate to the [`MovieStore`] held in
//! [`AppState`], and map failures via [`AppError`].
//!
//! [`MovieStore`]: marquee_db::MovieStore
//! [`AppState`]: crate::state::AppState
//! [`AppError`]: crate::error::AppError

pub mod movies;
