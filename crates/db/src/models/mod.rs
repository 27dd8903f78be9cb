//! Row structs for catalog tables.

pub mod movie;
