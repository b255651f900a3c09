/// Station-reading feed adapter, shared by the air-temperature and
/// relative-humidity feeds — both use the same response shape.
///
/// Feeds: /v1/environment/air-temperature
///        /v1/environment/relative-humidity
///
/// Response shape (fields used):
///   items[0].readings[].{station_id, value}
///
/// One reading per reporting weather station. The aggregator averages
/// across all stations; an empty list falls back to the documented
/// island-wide defaults downstream.

use crate::model::{FeedError, StationReading};
use serde::Deserialize;

const TEMPERATURE_PATH: &str = "/v1/environment/air-temperature";
const HUMIDITY_PATH: &str = "/v1/environment/relative-humidity";

/// Full URL for the air-temperature feed.
pub fn temperature_url(base_url: &str) -> String {
    format!("{}{}", base_url, TEMPERATURE_PATH)
}

/// Full URL for the relative-humidity feed.
pub fn humidity_url(base_url: &str) -> String {
    format!("{}{}", base_url, HUMIDITY_PATH)
}

// ---------------------------------------------------------------------------
// Serde structures (upstream field names)
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default)]
struct ReadingsResponse {
    #[serde(default)]
    items: Vec<ReadingsItem>,
}

#[derive(Deserialize, Default)]
struct ReadingsItem {
    #[serde(default)]
    readings: Vec<RawReading>,
}

#[derive(Deserialize)]
struct RawReading {
    station_id: String,
    value: f64,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses a station-readings response body into one reading per
/// station. Absent `items` or an empty readings list yields an empty
/// vec; only malformed JSON fails.
pub fn parse_readings_response(json: &str) -> Result<Vec<StationReading>, FeedError> {
    let response: ReadingsResponse =
        serde_json::from_str(json).map_err(|e| FeedError::Shape(e.to_string()))?;

    let readings = response
        .items
        .into_iter()
        .next()
        .map(|item| {
            item.readings
                .into_iter()
                .map(|r| StationReading { station_id: r.station_id, value: r.value })
                .collect()
        })
        .unwrap_or_default();

    Ok(readings)
}

/// Fetches and parses the current per-station air temperatures.
pub fn fetch_temperature(
    client: &reqwest::blocking::Client,
    base_url: &str,
) -> Result<Vec<StationReading>, FeedError> {
    let body = super::fetch_json(client, &temperature_url(base_url))?;
    parse_readings_response(&body)
}

/// Fetches and parses the current per-station relative humidity.
pub fn fetch_humidity(
    client: &reqwest::blocking::Client,
    base_url: &str,
) -> Result<Vec<StationReading>, FeedError> {
    let body = super::fetch_json(client, &humidity_url(base_url))?;
    parse_readings_response(&body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::*;

    #[test]
    fn test_feed_urls_target_their_feeds() {
        assert_eq!(
            temperature_url("https://api.data.gov.sg"),
            "https://api.data.gov.sg/v1/environment/air-temperature"
        );
        assert_eq!(
            humidity_url("https://api.data.gov.sg"),
            "https://api.data.gov.sg/v1/environment/relative-humidity"
        );
    }

    #[test]
    fn test_parse_one_reading_per_station() {
        let readings = parse_readings_response(fixture_temperature_json())
            .expect("valid fixture should parse");

        assert_eq!(readings.len(), 3);
        assert_eq!(readings[0].station_id, "S109");
        assert!((readings[0].value - 29.4).abs() < 1e-9);
    }

    #[test]
    fn test_humidity_fixture_shares_the_shape() {
        let readings = parse_readings_response(fixture_humidity_json())
            .expect("humidity payload uses the same adapter");
        assert_eq!(readings.len(), 3);
        assert!((readings[2].value - 90.1).abs() < 1e-9);
    }

    #[test]
    fn test_empty_payload_yields_no_readings() {
        let readings = parse_readings_response(fixture_empty_json())
            .expect("absent items should not fail");
        assert!(readings.is_empty());
    }

    #[test]
    fn test_empty_readings_list() {
        let readings = parse_readings_response(r#"{ "items": [{ "readings": [] }] }"#)
            .expect("empty station list should parse");
        assert!(readings.is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_shape_error() {
        assert!(matches!(
            parse_readings_response("readings: nope"),
            Err(FeedError::Shape(_))
        ));
    }
}
