use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Status code reported by the upstream, if the failure came from one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::Upstream { status, .. } => Some(*status),
            AppError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

// Implement alias for Result to simplify usage
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_display() {
        let err = AppError::Upstream {
            status: 401,
            body: r#"{"error":"invalid_client"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Upstream returned 401: {"error":"invalid_client"}"#
        );
        assert_eq!(err.upstream_status(), Some(401));
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = AppError::Config("SPOTIFY_CLIENT_ID is not set".to_string());
        assert_eq!(err.upstream_status(), None);
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
