// proxy module - Spotify token relay and Deezer preview lookup

pub mod common;
pub mod config;
pub mod handlers; // API endpoint handlers
pub mod middleware; // Axum middleware
pub mod server;
pub mod upstream; // Upstream client

pub use config::ProxyConfig;
pub use server::{build_router, AppState, AxumServer};
