/// HTTP endpoints for the environmental dashboard.
///
/// Serves the browser dashboard and its three read-only JSON APIs:
/// - GET /              - Static dashboard page
/// - GET /api/dashboard - Combined snapshot with all derived verdicts
/// - GET /api/weather   - 2-hour forecast with area coordinates
/// - GET /api/psi       - 5-region PSI breakdown
///
/// Every API response is an envelope with a boolean `success` flag; on
/// failure the envelope carries a human-readable `error` message. Both
/// arrive with HTTP 200 so the page's fetch handler only ever branches
/// on the flag. Upstream failures never crash the process — each
/// request is independent.

use crate::aggregate;
use crate::config::ServiceConfig;
use crate::ingest::forecast::{self, ValidPeriod};
use crate::ingest::psi;
use crate::model::{DashboardSnapshot, FeedError, ForecastEntry};
use chrono::{FixedOffset, Utc};
use serde::Serialize;
use serde_json::json;

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// Singapore civil time as `YYYY-MM-DD HH:MM:SS`. Fixed UTC+8, no
/// daylight saving, regardless of the host's local time zone.
pub fn singapore_timestamp() -> String {
    let sgt = FixedOffset::east_opt(8 * 3600).expect("UTC+8 is a valid offset");
    Utc::now().with_timezone(&sgt).format("%Y-%m-%d %H:%M:%S").to_string()
}

// ---------------------------------------------------------------------------
// Response Types
// ---------------------------------------------------------------------------

/// Weather endpoint body: forecasts with coordinates, plus the feed's
/// stated validity window.
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    pub forecasts: Vec<ForecastEntry>,
    pub valid_period: ValidPeriod,
}

/// PSI endpoint body: the per-region verdict without scores or
/// advisories beyond the level itself.
#[derive(Debug, Serialize)]
pub struct PsiResponse {
    pub regions: Vec<PsiRegionSummary>,
}

#[derive(Debug, Serialize)]
pub struct PsiRegionSummary {
    pub region: &'static str,
    pub psi: f64,
    pub pm25: f64,
    pub level: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Full aggregation: fetch all six feeds, derive everything.
fn handle_dashboard(
    client: &reqwest::blocking::Client,
    base_url: &str,
) -> Result<DashboardSnapshot, FeedError> {
    let feeds = aggregate::fetch_feeds(client, base_url)?;
    Ok(aggregate::assemble_dashboard(&feeds))
}

/// Weather-only: fetch just the 2-hour forecast, classify each area
/// and join its centroid coordinates, sorted alphabetically by area.
fn handle_weather(
    client: &reqwest::blocking::Client,
    base_url: &str,
) -> Result<WeatherResponse, FeedError> {
    let doc = forecast::fetch(client, base_url)?;

    let mut forecasts: Vec<ForecastEntry> = doc
        .areas
        .iter()
        .map(|area| {
            let coords = doc.coords.get(&area.area);
            ForecastEntry {
                area: area.area.clone(),
                forecast: area.forecast.clone(),
                emoji: crate::analysis::emoji::weather_emoji(&area.forecast),
                lat: coords.map(|c| c.0),
                lng: coords.map(|c| c.1),
            }
        })
        .collect();
    forecasts.sort_by(|a, b| a.area.cmp(&b.area));

    Ok(WeatherResponse { forecasts, valid_period: doc.valid_period })
}

/// PSI-only: fetch just the PSI feed and report the 5-region breakdown.
fn handle_psi(
    client: &reqwest::blocking::Client,
    base_url: &str,
) -> Result<PsiResponse, FeedError> {
    let doc = psi::fetch(client, base_url)?;

    let regions = aggregate::regional_breakdown(&doc)
        .into_iter()
        .map(|r| PsiRegionSummary {
            region: r.region,
            psi: r.psi,
            pm25: r.pm25,
            level: r.level.level,
            color: r.level.color,
            emoji: r.level.emoji,
        })
        .collect();

    Ok(PsiResponse { regions })
}

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// Wraps a successful body in the `{success: true, timestamp, ...}`
/// envelope. Body fields sit at the top level alongside the flag.
fn success_envelope<T: Serialize>(body: &T, timestamp: String) -> serde_json::Value {
    let mut value = serde_json::to_value(body).expect("response bodies serialize to objects");
    let map = value.as_object_mut().expect("response bodies are JSON objects");
    map.insert("success".to_string(), json!(true));
    map.insert("timestamp".to_string(), json!(timestamp));
    value
}

/// The uniform failure envelope. Carries only the flag and a message —
/// never partial data.
fn failure_envelope(err: &FeedError) -> serde_json::Value {
    json!({ "success": false, "error": err.to_string() })
}

fn envelope_response<T: Serialize>(
    result: Result<T, FeedError>,
) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    match result {
        Ok(body) => create_response(200, success_envelope(&body, singapore_timestamp())),
        Err(e) => {
            eprintln!("Request failed: {}", e);
            create_response(200, failure_envelope(&e))
        }
    }
}

/// Create HTTP response with JSON body
fn create_response(status_code: u16, json: serde_json::Value) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let body = serde_json::to_string(&json).unwrap();
    let bytes = body.into_bytes();

    tiny_http::Response::from_data(bytes)
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap()
        )
}

/// The embedded dashboard page. Pure rendering — all logic lives
/// behind the JSON endpoints it polls.
const DASHBOARD_PAGE: &str = include_str!("../static/index.html");

fn page_response() -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    tiny_http::Response::from_data(DASHBOARD_PAGE.as_bytes().to_vec())
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..])
                .unwrap(),
        )
}

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start the endpoint server. Blocks, serving requests sequentially;
/// there is no shared mutable state between requests.
pub fn start_endpoint_server(config: &ServiceConfig) -> Result<(), String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(config.fetch_timeout_secs))
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

    let server = tiny_http::Server::http(format!("0.0.0.0:{}", config.port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;

    println!("📡 Dashboard listening on http://0.0.0.0:{}", config.port);
    println!("   GET /              - Dashboard page");
    println!("   GET /api/dashboard - Combined snapshot");
    println!("   GET /api/weather   - 2-hour forecast");
    println!("   GET /api/psi       - Regional PSI\n");

    for request in server.incoming_requests() {
        let response = match request.url() {
            "/" => page_response(),
            "/api/dashboard" => envelope_response(handle_dashboard(&client, &config.base_url)),
            "/api/weather" => envelope_response(handle_weather(&client, &config.base_url)),
            "/api/psi" => envelope_response(handle_psi(&client, &config.base_url)),
            _ => create_response(
                404,
                json!({
                    "error": "Not found",
                    "available_endpoints": ["/", "/api/dashboard", "/api/weather", "/api/psi"]
                }),
            ),
        };

        if let Err(e) = request.respond(response) {
            eprintln!("Failed to send response: {}", e);
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
