pub mod config;
pub mod credentials;
pub mod preview;

pub use config::AppConfig;
pub use credentials::SpotifyCredentials;
pub use preview::{DeezerSearchResponse, PreviewQuery, PreviewResult};
