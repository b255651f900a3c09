/// Outdoor-activity advisories: exercise safety score, laundry-drying
/// forecast, and the activity suggestion catalogs.

use crate::model::{ExerciseVerdict, LaundryVerdict, Suggestion};

/// Keywords that mark a forecast text as rainy, matched case-insensitively
/// as substrings. Shared by the laundry forecast and the aggregator's
/// island-wide rain flag.
pub const RAIN_KEYWORDS: &[&str] = &["rain", "shower", "thunder", "storm"];

/// How many forecast areas the laundry check inspects. Deliberately
/// narrower than the island-wide rain flag, which scans every area.
pub const LAUNDRY_SCAN_WINDOW: usize = 10;

// ---------------------------------------------------------------------------
// Exercise score
// ---------------------------------------------------------------------------

/// Per-factor penalty steps: first threshold the value strictly exceeds
/// wins, so at most one deduction applies per factor.
fn penalty_above(value: f64, steps: &[(f64, i32)]) -> i32 {
    steps
        .iter()
        .find(|(threshold, _)| value > *threshold)
        .map(|(_, deduction)| *deduction)
        .unwrap_or(0)
}

/// Computes the 0-100 exercise safety score. Starts from 100 and
/// subtracts independent penalties for air quality, UV, temperature and
/// humidity, clamped to [0, 100].
pub fn exercise_score(psi: f64, uv: f64, temp: f64, humidity: f64) -> i32 {
    let mut score = 100;

    // PSI impact (most important)
    score -= penalty_above(psi, &[(100.0, 50), (75.0, 30), (50.0, 15)]);

    // UV impact
    score -= penalty_above(uv, &[(10.0, 25), (7.0, 15), (5.0, 10)]);

    // Temperature impact (ideal 20-26°C)
    score -= penalty_above(temp, &[(34.0, 30), (32.0, 20), (30.0, 10)]);
    if temp < 20.0 {
        score -= 5;
    }

    // Humidity impact (ideal < 70%)
    score -= penalty_above(humidity, &[(90.0, 20), (80.0, 10), (70.0, 5)]);

    score.clamp(0, 100)
}

/// Maps an exercise score to its recommendation.
pub fn exercise_verdict(score: i32) -> ExerciseVerdict {
    if score >= 70 {
        ExerciseVerdict {
            verdict: "GO!",
            color: "#4CAF50",
            emoji: "🏃",
            advice: "Great conditions for outdoor exercise!",
        }
    } else if score >= 50 {
        ExerciseVerdict {
            verdict: "CAUTION",
            color: "#FFEB3B",
            emoji: "⚠️",
            advice: "Exercise possible but stay hydrated, avoid midday",
        }
    } else {
        ExerciseVerdict {
            verdict: "AVOID",
            color: "#F44336",
            emoji: "🛑",
            advice: "Consider indoor exercise or wait for better conditions",
        }
    }
}

// ---------------------------------------------------------------------------
// Laundry forecast
// ---------------------------------------------------------------------------

/// Returns true if the text mentions any rain keyword.
pub fn mentions_rain(forecast_text: &str) -> bool {
    let lower = forecast_text.to_lowercase();
    RAIN_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Laundry-drying verdict from the first `LAUNDRY_SCAN_WINDOW` area
/// forecasts (in feed order) and the island-wide humidity.
pub fn laundry_forecast(forecast_texts: &[String], humidity: f64) -> LaundryVerdict {
    let rain_expected = forecast_texts
        .iter()
        .take(LAUNDRY_SCAN_WINDOW)
        .any(|text| mentions_rain(text));

    if rain_expected {
        LaundryVerdict {
            verdict: "NO",
            color: "#F44336",
            emoji: "🌧️",
            advice: "Rain expected - dry indoors",
        }
    } else if humidity > 85.0 {
        LaundryVerdict {
            verdict: "SLOW",
            color: "#FFEB3B",
            emoji: "💧",
            advice: "High humidity - clothes will dry slowly",
        }
    } else {
        LaundryVerdict {
            verdict: "YES",
            color: "#4CAF50",
            emoji: "👕",
            advice: "Good drying conditions!",
        }
    }
}

// ---------------------------------------------------------------------------
// Activity suggestions
// ---------------------------------------------------------------------------

static RAINY_DAY_ACTIVITIES: &[Suggestion] = &[
    Suggestion { activity: "Visit a museum", emoji: "🏛️" },
    Suggestion { activity: "Shopping mall exploration", emoji: "🛍️" },
    Suggestion { activity: "Indoor rock climbing", emoji: "🧗" },
    Suggestion { activity: "Café hopping", emoji: "☕" },
];

static HAZE_ACTIVITIES: &[Suggestion] = &[
    Suggestion { activity: "Stay indoors", emoji: "🏠" },
    Suggestion { activity: "Gym workout", emoji: "🏋️" },
    Suggestion { activity: "Movie marathon", emoji: "🎬" },
];

static HOT_DAY_ACTIVITIES: &[Suggestion] = &[
    Suggestion { activity: "Swimming", emoji: "🏊" },
    Suggestion { activity: "Early morning jog (before 8am)", emoji: "🌅" },
    Suggestion { activity: "Evening park walk (after 6pm)", emoji: "🌆" },
    Suggestion { activity: "Air-con hawker centre lunch", emoji: "🍜" },
];

static FAIR_DAY_ACTIVITIES: &[Suggestion] = &[
    Suggestion { activity: "Park run or jog", emoji: "🏃" },
    Suggestion { activity: "Cycling at ECP", emoji: "🚴" },
    Suggestion { activity: "Gardens by the Bay", emoji: "🌺" },
    Suggestion { activity: "Outdoor photography", emoji: "📸" },
];

/// Picks at most 4 activity suggestions from the fixed catalogs.
///
/// Priority-ordered decision list: rain trumps haze trumps heat; the
/// outdoor catalog is the fallback for decent conditions.
pub fn activity_suggestions(
    psi: f64,
    uv: f64,
    temp: f64,
    rain_expected: bool,
) -> Vec<Suggestion> {
    let catalog = if rain_expected {
        RAINY_DAY_ACTIVITIES
    } else if psi > 100.0 {
        HAZE_ACTIVITIES
    } else if uv > 7.0 || temp > 32.0 {
        HOT_DAY_ACTIVITIES
    } else {
        FAIR_DAY_ACTIVITIES
    };

    catalog.iter().take(4).copied().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
