/// sgenv_service: Singapore environmental conditions dashboard service.
///
/// # Module structure
///
/// ```text
/// sgenv_service
/// ├── model       — shared data types (verdicts, readings, snapshot, FeedError)
/// ├── config      — service configuration + documented fallback constants
/// ├── regions     — fixed 5-region PSI registry (north/south/east/west/central)
/// ├── endpoint    — tiny_http server: dashboard page + three JSON APIs
/// ├── aggregate   — snapshot aggregator: fan-out fetch + assembly
/// ├── ingest
/// │   ├── forecast — 2-hour forecast feed: areas, coordinates, validity window
/// │   ├── outlook  — 24-hour forecast feed: general + periods pass-through
/// │   ├── psi      — PSI feed: per-region PSI and PM2.5
/// │   ├── uv       — UV index feed: first entry of the hourly series
/// │   ├── readings — air-temperature and relative-humidity station feeds
/// │   └── fixtures (test only) — representative feed payloads
/// └── analysis
///     ├── bands      — ordered threshold-band verdict tables
///     ├── heat_index — Rothfusz "feels like" temperature
///     ├── advice     — exercise score, laundry forecast, activity catalogs
///     └── emoji      — forecast text → weather icon rule list
/// ```

/// Public modules
pub mod aggregate;
pub mod analysis;
pub mod config;
pub mod endpoint;
pub mod ingest;
pub mod model;
pub mod regions;
