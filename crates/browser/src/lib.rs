//! Terminal catalog browser for the Marquee listing API.

pub mod app;
pub mod client;
pub mod command;
pub mod config;
pub mod state;
pub mod view;
