/// 2-hour weather forecast feed adapter.
///
/// Feed: /v1/environment/2-hour-weather-forecast
///
/// Response shape (fields used):
///   area_metadata[] .name
///                   .label_location.{latitude, longitude}
///   items[0] .valid_period.{start, end}
///            .forecasts[].{area, forecast}
///
/// `area_metadata` carries each area's centroid; the weather endpoint
/// joins coordinates onto forecasts by area name. Only the first item
/// (the current forecast issue) is consumed.

use crate::model::FeedError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const FORECAST_2H_PATH: &str = "/v1/environment/2-hour-weather-forecast";

/// Full URL for the 2-hour forecast feed.
pub fn feed_url(base_url: &str) -> String {
    format!("{}{}", base_url, FORECAST_2H_PATH)
}

// ---------------------------------------------------------------------------
// Serde structures (upstream field names)
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default)]
struct ForecastResponse {
    #[serde(default)]
    area_metadata: Vec<AreaMetadata>,
    #[serde(default)]
    items: Vec<ForecastItem>,
}

#[derive(Deserialize)]
struct AreaMetadata {
    name: String,
    label_location: LabelLocation,
}

#[derive(Deserialize)]
struct LabelLocation {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize, Default)]
struct ForecastItem {
    #[serde(default)]
    valid_period: ValidPeriod,
    #[serde(default)]
    forecasts: Vec<RawAreaForecast>,
}

#[derive(Deserialize)]
struct RawAreaForecast {
    area: String,
    forecast: String,
}

// ---------------------------------------------------------------------------
// Parsed document
// ---------------------------------------------------------------------------

/// The forecast issue's stated validity window, passed through to the
/// weather endpoint unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidPeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// One area's forecast text, in feed order.
#[derive(Debug, Clone)]
pub struct AreaForecast {
    pub area: String,
    pub forecast: String,
}

/// Typed view of the 2-hour forecast feed.
#[derive(Debug, Clone, Default)]
pub struct ForecastDocument {
    /// Area forecasts in the order the feed listed them. The laundry
    /// check depends on this order (it scans only the first entries).
    pub areas: Vec<AreaForecast>,
    /// Area name → centroid (latitude, longitude).
    pub coords: HashMap<String, (f64, f64)>,
    pub valid_period: ValidPeriod,
}

/// Parses a 2-hour forecast response body.
///
/// An empty `items` list (no current issue) produces an empty document,
/// not an error; only malformed JSON fails.
pub fn parse_forecast_response(json: &str) -> Result<ForecastDocument, FeedError> {
    let response: ForecastResponse =
        serde_json::from_str(json).map_err(|e| FeedError::Shape(e.to_string()))?;

    let coords = response
        .area_metadata
        .into_iter()
        .map(|meta| {
            (
                meta.name,
                (meta.label_location.latitude, meta.label_location.longitude),
            )
        })
        .collect();

    let (areas, valid_period) = match response.items.into_iter().next() {
        Some(item) => (
            item.forecasts
                .into_iter()
                .map(|f| AreaForecast { area: f.area, forecast: f.forecast })
                .collect(),
            item.valid_period,
        ),
        None => (Vec::new(), ValidPeriod::default()),
    };

    Ok(ForecastDocument { areas, coords, valid_period })
}

/// Fetches and parses the current 2-hour forecast.
pub fn fetch(
    client: &reqwest::blocking::Client,
    base_url: &str,
) -> Result<ForecastDocument, FeedError> {
    let body = super::fetch_json(client, &feed_url(base_url))?;
    parse_forecast_response(&body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
