/// Forecast-text → weather emoji classification.
///
/// An ordered rule list matched case-insensitively as substrings,
/// first-match-wins. Order matters: several keywords co-occur in real
/// forecast strings ("Partly Cloudy" contains "cloudy", "Heavy Showers"
/// contains "showers"), so the more specific rule must sit earlier.
/// "partly cloudy" is checked before "cloudy" for exactly this reason.

/// The rule list, most specific first. The final fallback is
/// `DEFAULT_EMOJI`, used when no keyword matches.
pub static EMOJI_RULES: &[(&str, &str)] = &[
    ("thunder", "⛈️"),
    ("heavy rain", "🌧️"),
    ("heavy showers", "🌧️"),
    ("rain", "🌦️"),
    ("showers", "🌦️"),
    ("partly cloudy", "⛅"),
    ("cloudy", "☁️"),
    ("fair", "☀️"),
    ("sunny", "☀️"),
    ("hazy", "🌫️"),
    ("windy", "💨"),
];

pub const DEFAULT_EMOJI: &str = "🌤️";

/// Classifies a forecast text, e.g. "Partly Cloudy (Day)" → ⛅.
pub fn weather_emoji(forecast: &str) -> &'static str {
    let lower = forecast.to_lowercase();
    EMOJI_RULES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, emoji)| *emoji)
        .unwrap_or(DEFAULT_EMOJI)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
