/// UV index feed adapter.
///
/// Feed: /v1/environment/uv-index
///
/// Response shape (fields used):
///   items[0].index[0].value
///
/// The feed is a time series of hourly index values with the most
/// recent first; only the first entry is consumed. An empty series
/// reports the documented default of 0 (UV is 0 at night, which is
/// also when the feed tends to go quiet).

use crate::config::DEFAULT_UV_INDEX;
use crate::model::FeedError;
use serde::Deserialize;

const UV_PATH: &str = "/v1/environment/uv-index";

/// Full URL for the UV index feed.
pub fn feed_url(base_url: &str) -> String {
    format!("{}{}", base_url, UV_PATH)
}

// ---------------------------------------------------------------------------
// Serde structures (upstream field names)
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default)]
struct UvResponse {
    #[serde(default)]
    items: Vec<UvItem>,
}

#[derive(Deserialize, Default)]
struct UvItem {
    #[serde(default)]
    index: Vec<UvEntry>,
}

#[derive(Deserialize)]
struct UvEntry {
    #[serde(default)]
    value: f64,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses a UV response body into the current index value.
pub fn parse_uv_response(json: &str) -> Result<f64, FeedError> {
    let response: UvResponse =
        serde_json::from_str(json).map_err(|e| FeedError::Shape(e.to_string()))?;

    let value = response
        .items
        .into_iter()
        .next()
        .and_then(|item| item.index.into_iter().next())
        .map(|entry| entry.value)
        .unwrap_or(DEFAULT_UV_INDEX);

    Ok(value)
}

/// Fetches and parses the current UV index.
pub fn fetch(client: &reqwest::blocking::Client, base_url: &str) -> Result<f64, FeedError> {
    let body = super::fetch_json(client, &feed_url(base_url))?;
    parse_uv_response(&body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
