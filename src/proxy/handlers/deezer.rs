// Deezer preview lookup
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, warn};

use crate::models::PreviewQuery;
use crate::proxy::common::utils::error_response;
use crate::proxy::server::AppState;

pub const MISSING_PARAMS_ERROR: &str = "Missing track or artist name";
pub const PREVIEW_ERROR: &str = "Failed to fetch preview from Deezer";

/// Resolve `track` + `artist` to a Deezer preview clip URL, or null
pub async fn handle_get_preview(
    State(state): State<AppState>,
    query: Result<Query<PreviewQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(q)) => q,
        Err(e) => {
            warn!("Rejected preview query: {}", e);
            return error_response(StatusCode::BAD_REQUEST, MISSING_PARAMS_ERROR);
        }
    };

    let (track, artist) = match query.validate() {
        Ok(pair) => pair,
        Err(missing) => {
            warn!("Preview request missing: {}", missing.join(", "));
            return error_response(StatusCode::BAD_REQUEST, MISSING_PARAMS_ERROR);
        }
    };

    match state.upstream.search_preview(track, artist).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!(status = ?e.upstream_status(), "Error fetching Deezer preview: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, PREVIEW_ERROR)
        }
    }
}
