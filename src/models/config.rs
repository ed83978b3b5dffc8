use crate::models::SpotifyCredentials;
use crate::proxy::ProxyConfig;

/// Application configuration
#[derive(Debug)]
pub struct AppConfig {
    pub credentials: SpotifyCredentials,
    pub proxy: ProxyConfig,
}

impl AppConfig {
    pub fn new(credentials: SpotifyCredentials) -> Self {
        Self {
            credentials,
            proxy: ProxyConfig::default(),
        }
    }
}
