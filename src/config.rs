/// Service configuration loader - parses sgenv.toml when present.
///
/// Also the single source of truth for the fallback values substituted
/// when an upstream feed is structurally empty. Tests and documentation
/// reference these constants rather than repeating magic numbers.

use serde::Deserialize;
use std::fs;

// ---------------------------------------------------------------------------
// Fallback constants
// ---------------------------------------------------------------------------

/// Island-wide mean air temperature substituted when the temperature
/// feed reports no stations (°C).
pub const DEFAULT_TEMPERATURE_C: f64 = 28.0;

/// Relative humidity substituted when the humidity feed reports no
/// stations (%).
pub const DEFAULT_HUMIDITY_PCT: f64 = 80.0;

/// Overall PSI substituted when no regional readings are available.
pub const DEFAULT_PSI: f64 = 50.0;

/// UV index substituted when the UV feed's time series is empty.
pub const DEFAULT_UV_INDEX: f64 = 0.0;

/// A region absent from the PSI feed's readings map reports this value.
pub const DEFAULT_REGION_PSI: f64 = 0.0;

// ---------------------------------------------------------------------------
// Service configuration
// ---------------------------------------------------------------------------

/// Runtime configuration. Every field has a default so the service runs
/// with no configuration file at all; `sgenv.toml` overrides individual
/// fields when present.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Port for the HTTP endpoint server.
    pub port: u16,

    /// Base URL for the data.gov.sg environment feeds. Overridable so
    /// tests can point the service at a local stub server.
    pub base_url: String,

    /// Per-call timeout for upstream fetches, in seconds. A timeout is
    /// treated like any other fetch failure.
    pub fetch_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 5051,
            base_url: "https://api.data.gov.sg".to_string(),
            fetch_timeout_secs: 10,
        }
    }
}

/// Loads configuration from the given TOML file, falling back to the
/// defaults when the file does not exist.
///
/// # Errors
/// Returns an error string if the file exists but cannot be read or
/// parsed — a present-but-broken configuration should stop startup
/// rather than silently run with defaults.
pub fn load_config(path: &str) -> Result<ServiceConfig, String> {
    if !std::path::Path::new(path).exists() {
        return Ok(ServiceConfig::default());
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path, e))?;

    toml::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path, e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
