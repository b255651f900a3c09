/// Snapshot aggregator: turns the six upstream feeds into one
/// consistent `DashboardSnapshot`.
///
/// Fetching is fan-out/fan-in: the six independent read-only calls run
/// on a thread pool and results are collected over a channel. Failure
/// semantics stay whole-operation fail-fast — any transport or parse
/// failure fails the snapshot as a unit, never a partial one. This is
/// a deliberate tradeoff: a dashboard quietly missing its air-quality
/// panel is worse than one that visibly says it couldn't load.
///
/// Structurally-empty payloads are NOT failures: they flow through the
/// adapters as empty documents and land on the named defaults from
/// `config` here.

use crate::analysis::advice::{
    activity_suggestions, exercise_score, exercise_verdict, laundry_forecast, mentions_rain,
};
use crate::analysis::bands::{feels_like_verdict, psi_level, uv_level};
use crate::analysis::emoji::weather_emoji;
use crate::analysis::heat_index::heat_index;
use crate::config::{
    DEFAULT_HUMIDITY_PCT, DEFAULT_PSI, DEFAULT_REGION_PSI, DEFAULT_TEMPERATURE_C,
};
use crate::ingest::forecast::ForecastDocument;
use crate::ingest::psi::PsiDocument;
use crate::ingest::{self, forecast, outlook, psi, readings, uv};
use crate::model::{
    CurrentConditions, DashboardSnapshot, ExerciseAssessment, FeedError, ForecastEntry,
    Outlook24h, RegionalPsi, StationReading,
};
use crate::regions::REGION_REGISTRY;
use std::sync::mpsc;
use threadpool::ThreadPool;

// ---------------------------------------------------------------------------
// Feed set
// ---------------------------------------------------------------------------

/// Parsed results of all six upstream feeds for one request.
#[derive(Debug, Clone, Default)]
pub struct FeedSet {
    pub psi: PsiDocument,
    pub forecast: ForecastDocument,
    pub outlook: Outlook24h,
    pub uv_index: f64,
    pub temperatures: Vec<StationReading>,
    pub humidities: Vec<StationReading>,
}

// ---------------------------------------------------------------------------
// Fetching (fan-out / fan-in)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FeedKind {
    Forecast,
    Psi,
    Outlook,
    Uv,
    Temperature,
    Humidity,
}

/// Fetches all six feed bodies concurrently, then parses them. Returns
/// the first error encountered; remaining in-flight fetches finish in
/// the background and their results are discarded.
pub fn fetch_feeds(
    client: &reqwest::blocking::Client,
    base_url: &str,
) -> Result<FeedSet, FeedError> {
    let urls = [
        (FeedKind::Forecast, forecast::feed_url(base_url)),
        (FeedKind::Psi, psi::feed_url(base_url)),
        (FeedKind::Outlook, outlook::feed_url(base_url)),
        (FeedKind::Uv, uv::feed_url(base_url)),
        (FeedKind::Temperature, readings::temperature_url(base_url)),
        (FeedKind::Humidity, readings::humidity_url(base_url)),
    ];

    let pool = ThreadPool::new(urls.len());
    let (tx, rx) = mpsc::channel();

    for (kind, url) in urls {
        let tx = tx.clone();
        let client = client.clone();
        pool.execute(move || {
            // A dropped receiver just means the request already failed.
            let _ = tx.send((kind, ingest::fetch_json(&client, &url)));
        });
    }
    drop(tx);

    let mut bodies = std::collections::HashMap::new();
    for (kind, result) in rx {
        bodies.insert(kind, result?);
    }

    let mut body = |kind: FeedKind| -> Result<String, FeedError> {
        bodies
            .remove(&kind)
            .ok_or_else(|| FeedError::Transport(format!("no response collected for {:?}", kind)))
    };

    Ok(FeedSet {
        forecast: forecast::parse_forecast_response(&body(FeedKind::Forecast)?)?,
        psi: psi::parse_psi_response(&body(FeedKind::Psi)?)?,
        outlook: outlook::parse_outlook_response(&body(FeedKind::Outlook)?)?,
        uv_index: uv::parse_uv_response(&body(FeedKind::Uv)?)?,
        temperatures: readings::parse_readings_response(&body(FeedKind::Temperature)?)?,
        humidities: readings::parse_readings_response(&body(FeedKind::Humidity)?)?,
    })
}

// ---------------------------------------------------------------------------
// Aggregation helpers
// ---------------------------------------------------------------------------

/// Arithmetic mean with a documented fallback for an empty list. Every
/// numeric aggregate in the snapshot goes through here so the
/// empty-source invariant holds in one place.
pub fn mean_or(values: &[f64], fallback: f64) -> f64 {
    if values.is_empty() {
        fallback
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Builds the per-region PSI breakdown for exactly the five registry
/// regions. A region missing from the feed reports the default of 0,
/// so the breakdown always has five entries.
pub fn regional_breakdown(doc: &PsiDocument) -> Vec<RegionalPsi> {
    REGION_REGISTRY
        .iter()
        .map(|region| {
            let psi = doc.psi.get(region.key).copied().unwrap_or(DEFAULT_REGION_PSI);
            let pm25 = doc.pm25.get(region.key).copied().unwrap_or(DEFAULT_REGION_PSI);
            RegionalPsi {
                region: region.display,
                psi,
                pm25,
                level: psi_level(psi),
            }
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Assembles the combined dashboard snapshot from parsed feeds. Pure:
/// all fetching and clock access happen in the callers.
pub fn assemble_dashboard(feeds: &FeedSet) -> DashboardSnapshot {
    let psi_regions = regional_breakdown(&feeds.psi);

    let region_values: Vec<f64> = psi_regions.iter().map(|r| r.psi).collect();
    let psi_value = mean_or(&region_values, DEFAULT_PSI);

    let temps: Vec<f64> = feeds.temperatures.iter().map(|r| r.value).collect();
    let temp_value = mean_or(&temps, DEFAULT_TEMPERATURE_C);

    let humids: Vec<f64> = feeds.humidities.iter().map(|r| r.value).collect();
    let humidity_value = mean_or(&humids, DEFAULT_HUMIDITY_PCT);

    let uv_value = feeds.uv_index;

    // The rain flag scans EVERY area, unlike the laundry check's
    // first-10 window — an island-wide "bring an umbrella" signal.
    let rain_expected = feeds
        .forecast
        .areas
        .iter()
        .any(|area| mentions_rain(&area.forecast));

    let forecast_texts: Vec<String> = feeds
        .forecast
        .areas
        .iter()
        .map(|area| area.forecast.clone())
        .collect();

    let mut forecasts: Vec<ForecastEntry> = feeds
        .forecast
        .areas
        .iter()
        .map(|area| ForecastEntry {
            area: area.area.clone(),
            forecast: area.forecast.clone(),
            emoji: weather_emoji(&area.forecast),
            lat: None,
            lng: None,
        })
        .collect();
    forecasts.sort_by(|a, b| a.area.cmp(&b.area));

    let feels_like = heat_index(temp_value, humidity_value);
    let score = exercise_score(psi_value, uv_value, temp_value, humidity_value);

    DashboardSnapshot {
        current: CurrentConditions {
            temperature: round1(temp_value),
            humidity: round1(humidity_value),
            uv_index: uv_value,
            uv_info: uv_level(uv_value),
            avg_psi: psi_value.round() as i64,
            feels_like,
            feels_like_info: feels_like_verdict(feels_like),
        },
        psi_regions,
        exercise: ExerciseAssessment { score, verdict: exercise_verdict(score) },
        laundry: laundry_forecast(&forecast_texts, humidity_value),
        activities: activity_suggestions(psi_value, uv_value, temp_value, rain_expected),
        rain_expected,
        forecasts,
        outlook_24h: feeds.outlook.clone(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
