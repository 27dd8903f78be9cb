//! Shared domain types for the Marquee movie catalog.
//!
//! Holds the movie record, the paginated result envelope, and the rules that
//! turn raw query parameters into a normalized listing query. Both the API
//! server and the terminal browser depend on this crate so the wire contract
//! is defined exactly once.

pub mod error;
pub mod listing;
pub mod movie;
