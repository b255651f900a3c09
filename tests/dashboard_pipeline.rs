/// Integration tests for the full parse → aggregate → serialize
/// pipeline, driven by representative upstream payloads.
///
/// These tests exercise the same path the dashboard endpoint takes,
/// minus the network: feed bodies go through the public ingest parsers
/// into a `FeedSet`, the aggregator assembles the snapshot, and the
/// result is serialized the way the envelope would serialize it.
///
/// Run with: cargo test --test dashboard_pipeline

use sgenv_service::aggregate::{self, FeedSet};
use sgenv_service::config::{DEFAULT_HUMIDITY_PCT, DEFAULT_TEMPERATURE_C};
use sgenv_service::ingest::{forecast, outlook, psi, readings, uv};

// ---------------------------------------------------------------------------
// Test payloads
// ---------------------------------------------------------------------------

const PSI_BODY: &str = r#"{
  "items": [{
    "readings": {
      "psi_twenty_four_hourly": { "north": 40, "south": 60, "east": 110, "west": 20, "central": 55 },
      "pm25_twenty_four_hourly": { "north": 14, "south": 22, "east": 48, "west": 8, "central": 19 }
    }
  }]
}"#;

const FORECAST_BODY: &str = r#"{
  "area_metadata": [
    { "name": "Bedok", "label_location": { "latitude": 1.321, "longitude": 103.924 } },
    { "name": "Ang Mo Kio", "label_location": { "latitude": 1.375, "longitude": 103.839 } }
  ],
  "items": [{
    "valid_period": { "start": "2024-06-01T14:00:00+08:00", "end": "2024-06-01T16:00:00+08:00" },
    "forecasts": [
      { "area": "Bedok", "forecast": "Partly Cloudy (Day)" },
      { "area": "Ang Mo Kio", "forecast": "Fair (Day)" }
    ]
  }]
}"#;

const OUTLOOK_BODY: &str = r#"{
  "items": [{
    "general": { "forecast": "Fair", "temperature": { "low": 25, "high": 33 } },
    "periods": []
  }]
}"#;

const UV_BODY: &str = r#"{ "items": [{ "index": [{ "value": 6 }] }] }"#;

const TEMPERATURE_BODY: &str = r#"{
  "items": [{ "readings": [
    { "station_id": "S109", "value": 30.1 },
    { "station_id": "S24", "value": 31.3 }
  ]}]
}"#;

const HUMIDITY_BODY: &str = r#"{
  "items": [{ "readings": [
    { "station_id": "S109", "value": 72.0 },
    { "station_id": "S24", "value": 76.0 }
  ]}]
}"#;

fn parse_feeds(
    psi_body: &str,
    forecast_body: &str,
    outlook_body: &str,
    uv_body: &str,
    temperature_body: &str,
    humidity_body: &str,
) -> FeedSet {
    FeedSet {
        psi: psi::parse_psi_response(psi_body).expect("psi should parse"),
        forecast: forecast::parse_forecast_response(forecast_body).expect("forecast should parse"),
        outlook: outlook::parse_outlook_response(outlook_body).expect("outlook should parse"),
        uv_index: uv::parse_uv_response(uv_body).expect("uv should parse"),
        temperatures: readings::parse_readings_response(temperature_body)
            .expect("temperature should parse"),
        humidities: readings::parse_readings_response(humidity_body)
            .expect("humidity should parse"),
    }
}

fn typical_feeds() -> FeedSet {
    parse_feeds(
        PSI_BODY,
        FORECAST_BODY,
        OUTLOOK_BODY,
        UV_BODY,
        TEMPERATURE_BODY,
        HUMIDITY_BODY,
    )
}

// ---------------------------------------------------------------------------
// End-to-end aggregation
// ---------------------------------------------------------------------------

#[test]
fn test_regional_levels_and_overall_average() {
    let snapshot = aggregate::assemble_dashboard(&typical_feeds());

    let levels: Vec<_> = snapshot
        .psi_regions
        .iter()
        .map(|r| (r.region, r.level.level))
        .collect();
    assert_eq!(
        levels,
        vec![
            ("North", "Good"),
            ("South", "Moderate"),
            ("East", "Unhealthy"),
            ("West", "Good"),
            ("Central", "Moderate"),
        ]
    );
    assert_eq!(snapshot.current.avg_psi, 57);
}

#[test]
fn test_derived_verdicts_for_typical_conditions() {
    let snapshot = aggregate::assemble_dashboard(&typical_feeds());

    // temp 30.7, humidity 74, uv 6, psi 57:
    // 100 - 15 (psi>50) - 10 (uv>5) - 10 (temp>30) - 5 (humidity>70) = 60
    assert_eq!(snapshot.exercise.score, 60);
    assert_eq!(snapshot.exercise.verdict.verdict, "CAUTION");
    assert_eq!(snapshot.laundry.verdict, "YES");
    assert!(!snapshot.rain_expected);
    assert_eq!(snapshot.current.uv_info.level, "High");
}

#[test]
fn test_snapshot_serializes_with_expected_top_level_fields() {
    let snapshot = aggregate::assemble_dashboard(&typical_feeds());
    let json = serde_json::to_value(&snapshot).expect("snapshot should serialize");

    for field in [
        "current",
        "psi_regions",
        "exercise",
        "laundry",
        "activities",
        "rain_expected",
        "forecasts",
        "outlook_24h",
    ] {
        assert!(json.get(field).is_some(), "missing top-level field '{}'", field);
    }
    // The flattened verdict structs land inline, not nested under a key.
    assert!(json["current"]["feels_like_info"]["level"].is_string());
    assert!(json["exercise"]["verdict"].is_string());
    assert_eq!(json["outlook_24h"]["general"]["forecast"], "Fair");
}

#[test]
fn test_forecast_entries_sorted_and_classified() {
    let snapshot = aggregate::assemble_dashboard(&typical_feeds());

    let areas: Vec<_> = snapshot.forecasts.iter().map(|f| f.area.as_str()).collect();
    assert_eq!(areas, vec!["Ang Mo Kio", "Bedok"], "sorted despite feed order");

    let bedok = &snapshot.forecasts[1];
    assert_eq!(
        bedok.emoji, "⛅",
        "Partly Cloudy must get the partly-cloudy icon, not plain cloudy"
    );
}

// ---------------------------------------------------------------------------
// Degraded upstream payloads
// ---------------------------------------------------------------------------

#[test]
fn test_all_feeds_empty_round_trips_to_documented_defaults() {
    let feeds = parse_feeds("{}", "{}", "{}", "{}", "{}", "{}");
    let snapshot = aggregate::assemble_dashboard(&feeds);

    assert_eq!(snapshot.current.temperature, DEFAULT_TEMPERATURE_C);
    assert_eq!(snapshot.current.humidity, DEFAULT_HUMIDITY_PCT);
    assert_eq!(snapshot.current.uv_index, 0.0);
    assert_eq!(snapshot.psi_regions.len(), 5);
    assert!(snapshot.psi_regions.iter().all(|r| r.psi == 0.0));
    assert!(snapshot.forecasts.is_empty());
    assert!(!snapshot.rain_expected);

    // The envelope still serializes cleanly — an all-empty upstream day
    // is a success response full of defaults, not an error.
    let json = serde_json::to_value(&snapshot).expect("defaults should serialize");
    assert_eq!(json["outlook_24h"]["general"], serde_json::json!({}));
    assert_eq!(json["outlook_24h"]["periods"], serde_json::json!([]));
}

#[test]
fn test_rain_scan_covers_all_areas_but_laundry_only_first_ten() {
    // Build a forecast body with 10 dry areas and an 11th rainy one.
    let mut entries: Vec<String> = (0..10)
        .map(|i| format!(r#"{{ "area": "Area {:02}", "forecast": "Fair (Day)" }}"#, i))
        .collect();
    entries.push(r#"{ "area": "Tuas", "forecast": "Heavy Thundery Showers" }"#.to_string());
    let body = format!(
        r#"{{ "items": [{{ "forecasts": [{}] }}] }}"#,
        entries.join(",")
    );

    let feeds = parse_feeds(PSI_BODY, &body, "{}", "{}", TEMPERATURE_BODY, HUMIDITY_BODY);
    let snapshot = aggregate::assemble_dashboard(&feeds);

    assert!(
        snapshot.rain_expected,
        "rain flag scans every area, including the 11th"
    );
    assert_eq!(
        snapshot.laundry.verdict, "YES",
        "laundry scans only the first 10 entries"
    );
    // Rain drives the activity catalog even though laundry didn't see it.
    assert_eq!(snapshot.activities[0].activity, "Visit a museum");
}

#[test]
fn test_malformed_feed_fails_parsing_as_a_unit() {
    let result = psi::parse_psi_response("<html>502 Bad Gateway</html>");
    assert!(
        result.is_err(),
        "an HTML error page must fail the request, not produce defaults"
    );
}
