/// 24-hour weather forecast feed adapter.
///
/// Feed: /v1/environment/24-hour-weather-forecast
///
/// Response shape (fields used):
///   items[0].general   — island-wide outlook (forecast, temperature, wind, …)
///   items[0].periods[] — time-segmented regional outlooks
///
/// The dashboard passes both fields through untouched (no derivation),
/// so they stay as raw JSON values rather than typed structures.

use crate::model::{FeedError, Outlook24h};
use serde::Deserialize;
use serde_json::Value;

const OUTLOOK_24H_PATH: &str = "/v1/environment/24-hour-weather-forecast";

/// Full URL for the 24-hour forecast feed.
pub fn feed_url(base_url: &str) -> String {
    format!("{}{}", base_url, OUTLOOK_24H_PATH)
}

// ---------------------------------------------------------------------------
// Serde structures (upstream field names)
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default)]
struct OutlookResponse {
    #[serde(default)]
    items: Vec<OutlookItem>,
}

#[derive(Deserialize)]
struct OutlookItem {
    #[serde(default = "empty_object")]
    general: Value,
    #[serde(default = "empty_array")]
    periods: Value,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

fn empty_array() -> Value {
    Value::Array(Vec::new())
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses a 24-hour forecast response into the pass-through projection.
/// Absent `items` yields an empty general object and periods array.
pub fn parse_outlook_response(json: &str) -> Result<Outlook24h, FeedError> {
    let response: OutlookResponse =
        serde_json::from_str(json).map_err(|e| FeedError::Shape(e.to_string()))?;

    let (general, periods) = match response.items.into_iter().next() {
        Some(item) => (item.general, item.periods),
        None => (empty_object(), empty_array()),
    };

    Ok(Outlook24h { general, periods })
}

/// Fetches and parses the 24-hour outlook.
pub fn fetch(
    client: &reqwest::blocking::Client,
    base_url: &str,
) -> Result<Outlook24h, FeedError> {
    let body = super::fetch_json(client, &feed_url(base_url))?;
    parse_outlook_response(&body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
