use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters accepted by the preview lookup
#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    pub track: Option<String>,
    pub artist: Option<String>,
}

impl PreviewQuery {
    /// Returns `(track, artist)` when both are present and non-blank,
    /// otherwise the names of the missing parameters.
    pub fn validate(&self) -> Result<(&str, &str), Vec<&'static str>> {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.trim().is_empty())
        }

        match (present(&self.track), present(&self.artist)) {
            (Some(track), Some(artist)) => Ok((track, artist)),
            (track, artist) => {
                let mut missing = Vec::new();
                if track.is_none() {
                    missing.push("track");
                }
                if artist.is_none() {
                    missing.push("artist");
                }
                Err(missing)
            }
        }
    }
}

/// Body returned to the front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResult {
    pub preview_url: Option<String>,
}

/// Subset of the Deezer `/search` reply
#[derive(Debug, Default, Deserialize)]
pub struct DeezerSearchResponse {
    /// Absent or `null` when nothing matched
    #[serde(default)]
    pub data: Option<Vec<DeezerTrack>>,
    /// Deezer reports refusals (quota, bad query) as 200 with an `error` object
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct DeezerTrack {
    #[serde(default)]
    pub preview: Option<String>,
}

impl DeezerSearchResponse {
    pub fn first_preview(&self) -> Option<String> {
        self.data
            .as_deref()
            .and_then(<[DeezerTrack]>::first)
            .and_then(|t| t.preview.clone())
    }
}

/// Deezer advanced-search expression for a single track
pub fn build_search_query(track: &str, artist: &str) -> String {
    format!("artist:\"{}\" track:\"{}\"", artist, track)
}
