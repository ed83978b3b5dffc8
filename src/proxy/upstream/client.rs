// Upstream client implementation
// One shared reqwest client for the token endpoint and the search API

use axum::body::Bytes;
use reqwest::{header, Client, Response};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::preview::build_search_query;
use crate::models::{DeezerSearchResponse, PreviewResult, SpotifyCredentials};
use crate::proxy::config::{ProxyConfig, UpstreamEndpoints};

pub struct UpstreamClient {
    http_client: Client,
    endpoints: UpstreamEndpoints,
}

impl UpstreamClient {
    pub fn new(http_client: Client, endpoints: UpstreamEndpoints) -> Self {
        Self {
            http_client,
            endpoints,
        }
    }

    pub fn from_config(config: &ProxyConfig) -> Self {
        let http_client = crate::utils::http::create_client_with_proxy(
            config.request_timeout,
            Some(&config.upstream_proxy),
        );
        Self::new(http_client, config.endpoints.clone())
    }

    /// Client-credentials grant against the token endpoint
    ///
    /// Returns the upstream body untouched once it is known to be JSON.
    pub async fn request_client_token(&self, credentials: &SpotifyCredentials) -> AppResult<Bytes> {
        let response = self
            .http_client
            .post(&self.endpoints.token_url)
            .header(header::AUTHORIZATION, credentials.basic_auth_header())
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let body = response.bytes().await?;
        serde_json::from_slice::<Value>(&body)?;

        tracing::debug!("Token endpoint answered with {} bytes", body.len());
        Ok(body)
    }

    /// Look up the preview clip of the best match for `track` by `artist`
    pub async fn search_preview(&self, track: &str, artist: &str) -> AppResult<PreviewResult> {
        let query = build_search_query(track, artist);
        // Percent-encoded (spaces as %20), not form-encoded
        let url = format!(
            "{}?q={}&limit=1",
            self.endpoints.search_url,
            urlencoding::encode(&query)
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let body = response.bytes().await?;
        let search: DeezerSearchResponse = serde_json::from_slice(&body)?;

        if let Some(error) = &search.error {
            tracing::warn!("Deezer refused search {:?}: {}", query, error);
        }

        Ok(PreviewResult {
            preview_url: search.first_preview(),
        })
    }
}

/// Turn a non-2xx reply into `AppError::Upstream`, keeping its body for logs
async fn ensure_success(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    // Best effort: compact JSON bodies, pass anything else through as text
    let body = match serde_json::from_str::<Value>(&text) {
        Ok(json) => json.to_string(),
        Err(_) => text,
    };

    Err(AppError::Upstream {
        status: status.as_u16(),
        body,
    })
}
