// Spotify token relay
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::proxy::common::utils::error_response;
use crate::proxy::server::AppState;

pub const TOKEN_ERROR: &str = "Failed to fetch token from Spotify";

/// Exchange the server's client credentials for an app access token and
/// relay the upstream JSON as-is
pub async fn handle_get_token(State(state): State<AppState>) -> Response {
    match state.upstream.request_client_token(&state.credentials).await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(status = ?e.upstream_status(), "Error fetching Spotify token: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, TOKEN_ERROR)
        }
    }
}
