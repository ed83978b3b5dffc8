use std::str::FromStr;

use crate::error::{AppError, AppResult};
use crate::models::{AppConfig, SpotifyCredentials};
use crate::proxy::config::UpstreamProxyConfig;

pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";
const PORT_VAR: &str = "PORT";
const ALLOW_LAN_VAR: &str = "ALLOW_LAN_ACCESS";
const TIMEOUT_VAR: &str = "UPSTREAM_TIMEOUT_SECS";
const UPSTREAM_PROXY_VAR: &str = "UPSTREAM_PROXY_URL";

/// Load application config from the process environment
///
/// A `.env` file is honoured when present; variables already set win.
pub fn load_app_config() -> AppResult<AppConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => return Err(AppError::Config(format!("Failed to read .env file: {}", e))),
    }

    load_app_config_from(|key| std::env::var(key).ok())
}

/// Build the config from an arbitrary variable lookup
pub fn load_app_config_from<F>(lookup: F) -> AppResult<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let client_id = non_empty(CLIENT_ID_VAR);
    let client_secret = non_empty(CLIENT_SECRET_VAR);

    let (client_id, client_secret) = match (client_id, client_secret) {
        (Some(id), Some(secret)) => (id, secret),
        (id, secret) => {
            let mut missing = Vec::new();
            if id.is_none() {
                missing.push(CLIENT_ID_VAR);
            }
            if secret.is_none() {
                missing.push(CLIENT_SECRET_VAR);
            }
            return Err(AppError::Config(format!(
                "Missing Spotify credentials: {} must be set and non-empty",
                missing.join(", ")
            )));
        }
    };

    let mut config = AppConfig::new(SpotifyCredentials::new(
        client_id.trim(),
        client_secret.trim(),
    ));

    if let Some(port) = parse_optional::<u16>(&non_empty, PORT_VAR)? {
        config.proxy.port = port;
    }
    if let Some(allow) = parse_optional::<bool>(&non_empty, ALLOW_LAN_VAR)? {
        config.proxy.allow_lan_access = allow;
    }
    if let Some(timeout) = parse_optional::<u64>(&non_empty, TIMEOUT_VAR)? {
        if timeout == 0 {
            return Err(AppError::Config(format!(
                "{} must be greater than 0",
                TIMEOUT_VAR
            )));
        }
        config.proxy.request_timeout = timeout;
    }
    if let Some(url) = non_empty(UPSTREAM_PROXY_VAR) {
        config.proxy.upstream_proxy = UpstreamProxyConfig {
            enabled: true,
            url: url.trim().to_string(),
        };
    }

    Ok(config)
}

fn parse_optional<T>(lookup: &dyn Fn(&str) -> Option<String>, key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| AppError::Config(format!("Invalid {} value {:?}: {}", key, raw, e)))
        })
        .transpose()
}
