/// PSI (Pollutant Standards Index) feed adapter.
///
/// Feed: /v1/environment/psi
///
/// Response shape (fields used):
///   items[0].readings.psi_twenty_four_hourly.{north,south,east,west,central}
///   items[0].readings.pm25_twenty_four_hourly.{north,south,east,west,central}
///
/// Readings are 24-hour rolling values keyed by region. Regions missing
/// from either map are left absent here; consumers substitute the
/// documented default of 0 via the region registry.

use crate::model::FeedError;
use serde::Deserialize;
use std::collections::HashMap;

const PSI_PATH: &str = "/v1/environment/psi";

/// Full URL for the PSI feed.
pub fn feed_url(base_url: &str) -> String {
    format!("{}{}", base_url, PSI_PATH)
}

// ---------------------------------------------------------------------------
// Serde structures (upstream field names)
// ---------------------------------------------------------------------------

#[derive(Deserialize, Default)]
struct PsiResponse {
    #[serde(default)]
    items: Vec<PsiItem>,
}

#[derive(Deserialize, Default)]
struct PsiItem {
    #[serde(default)]
    readings: PsiReadings,
}

#[derive(Deserialize, Default)]
struct PsiReadings {
    #[serde(default)]
    psi_twenty_four_hourly: HashMap<String, f64>,
    #[serde(default)]
    pm25_twenty_four_hourly: HashMap<String, f64>,
}

// ---------------------------------------------------------------------------
// Parsed document
// ---------------------------------------------------------------------------

/// Typed view of the PSI feed: region key → value for each pollutant
/// measure. Maps may be missing regions (or empty entirely).
#[derive(Debug, Clone, Default)]
pub struct PsiDocument {
    pub psi: HashMap<String, f64>,
    pub pm25: HashMap<String, f64>,
}

/// Parses a PSI response body. Absent `items` or readings maps produce
/// an empty document; only malformed JSON fails.
pub fn parse_psi_response(json: &str) -> Result<PsiDocument, FeedError> {
    let response: PsiResponse =
        serde_json::from_str(json).map_err(|e| FeedError::Shape(e.to_string()))?;

    let readings = response
        .items
        .into_iter()
        .next()
        .map(|item| item.readings)
        .unwrap_or_default();

    Ok(PsiDocument {
        psi: readings.psi_twenty_four_hourly,
        pm25: readings.pm25_twenty_four_hourly,
    })
}

/// Fetches and parses the current PSI readings.
pub fn fetch(
    client: &reqwest::blocking::Client,
    base_url: &str,
) -> Result<PsiDocument, FeedError> {
    let body = super::fetch_json(client, &feed_url(base_url))?;
    parse_psi_response(&body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
