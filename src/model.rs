/// Shared data types for the environmental dashboard service.
///
/// Everything here is a request-scoped value object: created while one
/// HTTP request is being served, serialized into the response, then
/// dropped. Nothing is persisted or shared between requests.
///
/// Verdict types (`PsiLevel`, `UvLevel`, `FeelsLikeVerdict`, …) carry
/// `&'static str` fields because every verdict is selected from a fixed
/// catalog in `analysis` — there are no runtime-constructed verdicts.

use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the upstream feed boundary.
///
/// Two categories only: the request never reached a usable payload
/// (`Transport`), or the payload arrived but wasn't the JSON document we
/// expect (`Shape`). Missing optional fields are NOT errors — they take
/// the default-substitution path in the ingest adapters.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("upstream request failed: {0}")]
    Transport(String),
    #[error("unexpected payload shape: {0}")]
    Shape(String),
}

// ---------------------------------------------------------------------------
// Raw readings
// ---------------------------------------------------------------------------

/// One station's reading from the air-temperature or relative-humidity
/// feed. Consumed immediately by the aggregator's mean computation.
#[derive(Debug, Clone, Serialize)]
pub struct StationReading {
    pub station_id: String,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Verdicts
// ---------------------------------------------------------------------------

/// PSI band verdict. `exercise_ok` feeds the dashboard's quick yes/no
/// indicator; the numeric exercise score is computed separately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PsiLevel {
    pub level: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
    pub exercise_ok: bool,
}

/// UV index band verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UvLevel {
    pub level: &'static str,
    pub color: &'static str,
    pub advice: &'static str,
}

/// Feels-like temperature band verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeelsLikeVerdict {
    pub level: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
    pub advice: &'static str,
}

/// Exercise recommendation derived from the 0-100 exercise score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExerciseVerdict {
    pub verdict: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
    pub advice: &'static str,
}

/// Laundry-drying recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LaundryVerdict {
    pub verdict: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
    pub advice: &'static str,
}

/// One suggested activity from the fixed per-branch catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Suggestion {
    pub activity: &'static str,
    pub emoji: &'static str,
}

// ---------------------------------------------------------------------------
// Regional / area entries
// ---------------------------------------------------------------------------

/// Per-region PSI breakdown entry. The verdict fields are flattened into
/// the JSON object alongside the readings, matching the dashboard's
/// expected shape.
#[derive(Debug, Clone, Serialize)]
pub struct RegionalPsi {
    pub region: &'static str,
    pub psi: f64,
    pub pm25: f64,
    #[serde(flatten)]
    pub level: PsiLevel,
}

/// One area's 2-hour forecast with its derived emoji. Coordinates are
/// present only on the weather endpoint, where they're joined from the
/// feed's `area_metadata` block; the dashboard omits them.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastEntry {
    pub area: String,
    pub forecast: String,
    pub emoji: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

// ---------------------------------------------------------------------------
// Dashboard snapshot
// ---------------------------------------------------------------------------

/// Current scalar conditions plus their verdicts.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub humidity: f64,
    pub uv_index: f64,
    pub uv_info: UvLevel,
    pub avg_psi: i64,
    pub feels_like: f64,
    pub feels_like_info: FeelsLikeVerdict,
}

/// Exercise score with its verdict fields flattened alongside.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseAssessment {
    pub score: i32,
    #[serde(flatten)]
    pub verdict: ExerciseVerdict,
}

/// 24-hour outlook: a pass-through projection of the upstream feed's
/// `general` and `periods` fields. No derivation happens here, so the
/// payload stays as raw JSON values.
#[derive(Debug, Clone, Serialize)]
pub struct Outlook24h {
    pub general: serde_json::Value,
    pub periods: serde_json::Value,
}

impl Default for Outlook24h {
    fn default() -> Self {
        Self {
            general: serde_json::Value::Object(serde_json::Map::new()),
            periods: serde_json::Value::Array(Vec::new()),
        }
    }
}

/// The combined dashboard response body. Built fresh per request from
/// the six upstream feeds; never cached or shared.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub current: CurrentConditions,
    pub psi_regions: Vec<RegionalPsi>,
    pub exercise: ExerciseAssessment,
    pub laundry: LaundryVerdict,
    pub activities: Vec<Suggestion>,
    pub rain_expected: bool,
    /// Sorted alphabetically by area name.
    pub forecasts: Vec<ForecastEntry>,
    pub outlook_24h: Outlook24h,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
