use base64::{engine::general_purpose::STANDARD, Engine as _};
use secrecy::{ExposeSecret, SecretString};

/// Spotify application credentials, read once at startup
#[derive(Debug)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: SecretString,
}

impl SpotifyCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret.into().into_boxed_str()),
        }
    }

    /// Value for the `Authorization` header of the client-credentials grant
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret.expose_secret());
        format!("Basic {}", STANDARD.encode(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        let creds = SpotifyCredentials::new("abc", "xyz");
        // base64("abc:xyz")
        assert_eq!(creds.basic_auth_header(), "Basic YWJjOnh5eg==");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = SpotifyCredentials::new("client-id", "super-secret-value");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("client-id"));
        assert!(!printed.contains("super-secret-value"));
    }
}
