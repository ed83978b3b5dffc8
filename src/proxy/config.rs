pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEEZER_SEARCH_URL: &str = "https://api.deezer.com/search";

/// Proxy service configuration
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Whether to accept connections from the LAN
    /// - false: loopback only, 127.0.0.1 (default)
    /// - true: all interfaces, 0.0.0.0
    pub allow_lan_access: bool,

    /// Listening port
    pub port: u16,

    /// Outbound request timeout (seconds)
    pub request_timeout: u64,

    /// Outbound proxy for upstream calls
    pub upstream_proxy: UpstreamProxyConfig,

    pub endpoints: UpstreamEndpoints,
}

/// Upstream proxy configuration
#[derive(Debug, Clone, Default)]
pub struct UpstreamProxyConfig {
    /// Whether the proxy is used
    pub enabled: bool,
    /// Proxy address (http://, https://, socks5://)
    pub url: String,
}

/// Third-party endpoints the handlers call
#[derive(Debug, Clone)]
pub struct UpstreamEndpoints {
    pub token_url: String,
    pub search_url: String,
}

impl Default for UpstreamEndpoints {
    fn default() -> Self {
        Self {
            token_url: SPOTIFY_TOKEN_URL.to_string(),
            search_url: DEEZER_SEARCH_URL.to_string(),
        }
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            allow_lan_access: false, // loopback only by default
            port: default_port(),
            request_timeout: default_request_timeout(),
            upstream_proxy: UpstreamProxyConfig::default(),
            endpoints: UpstreamEndpoints::default(),
        }
    }
}

pub fn default_port() -> u16 {
    3001
}

pub fn default_request_timeout() -> u64 {
    15
}

impl ProxyConfig {
    /// Address the listener binds to
    /// - allow_lan_access = false: "127.0.0.1" (default)
    /// - allow_lan_access = true: "0.0.0.0"
    pub fn get_bind_address(&self) -> &str {
        if self.allow_lan_access {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProxyConfig::default();
        assert_eq!(config.port, 3001);
        assert_eq!(config.request_timeout, 15);
        assert!(!config.upstream_proxy.enabled);
        assert_eq!(config.endpoints.token_url, SPOTIFY_TOKEN_URL);
        assert_eq!(config.endpoints.search_url, DEEZER_SEARCH_URL);
    }

    #[test]
    fn test_bind_address() {
        let mut config = ProxyConfig::default();
        assert_eq!(config.get_bind_address(), "127.0.0.1");
        config.allow_lan_access = true;
        assert_eq!(config.get_bind_address(), "0.0.0.0");
    }
}
