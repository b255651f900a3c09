/// Test fixtures: representative JSON payloads from the data.gov.sg
/// environment feeds.
///
/// These fixtures are structurally complete but truncated to the
/// minimum needed to exercise the adapters — the real 2-hour forecast
/// lists ~47 areas, the temperature feed a dozen-plus stations. They
/// reflect the v1 API envelope:
///
///   api_info.status          — ignored by the adapters
///   items[0]                 — the current issue; adapters use only [0]
///
/// `fixture_empty_json` stands in for the structurally-absent case the
/// default-substitution path must absorb.

/// 2-hour forecast: three areas in deliberately non-alphabetical feed
/// order, one of them rainy, plus centroid metadata and the issue's
/// validity window.
#[cfg(test)]
pub(crate) fn fixture_forecast_json() -> &'static str {
    r#"{
      "api_info": { "status": "healthy" },
      "area_metadata": [
        { "name": "Yishun", "label_location": { "latitude": 1.418, "longitude": 103.839 } },
        { "name": "Ang Mo Kio", "label_location": { "latitude": 1.375, "longitude": 103.839 } },
        { "name": "Bedok", "label_location": { "latitude": 1.321, "longitude": 103.924 } }
      ],
      "items": [{
        "update_timestamp": "2024-06-01T13:37:00+08:00",
        "timestamp": "2024-06-01T13:30:00+08:00",
        "valid_period": {
          "start": "2024-06-01T14:00:00+08:00",
          "end": "2024-06-01T16:00:00+08:00"
        },
        "forecasts": [
          { "area": "Yishun", "forecast": "Partly Cloudy (Day)" },
          { "area": "Ang Mo Kio", "forecast": "Fair (Day)" },
          { "area": "Bedok", "forecast": "Thundery Showers" }
        ]
      }]
    }"#
}

/// 2-hour forecast with every area dry — used to pin down the rain
/// flag's negative case.
#[cfg(test)]
pub(crate) fn fixture_forecast_dry_json() -> &'static str {
    r#"{
      "area_metadata": [],
      "items": [{
        "valid_period": { "start": "2024-06-01T14:00:00+08:00", "end": "2024-06-01T16:00:00+08:00" },
        "forecasts": [
          { "area": "Yishun", "forecast": "Fair (Day)" },
          { "area": "Bedok", "forecast": "Partly Cloudy (Day)" }
        ]
      }]
    }"#
}

/// PSI readings for all five regions. East at 110 is in the Unhealthy
/// band; the across-region mean works out to exactly 57.
#[cfg(test)]
pub(crate) fn fixture_psi_json() -> &'static str {
    r#"{
      "region_metadata": [
        { "name": "north", "label_location": { "latitude": 1.41803, "longitude": 103.82 } },
        { "name": "south", "label_location": { "latitude": 1.29587, "longitude": 103.82 } }
      ],
      "items": [{
        "timestamp": "2024-06-01T13:00:00+08:00",
        "readings": {
          "psi_twenty_four_hourly": {
            "north": 40, "south": 60, "east": 110, "west": 20, "central": 55
          },
          "pm25_twenty_four_hourly": {
            "north": 14, "south": 22, "east": 48, "west": 8, "central": 19
          }
        }
      }]
    }"#
}

/// PSI readings with the west region absent from both maps — simulates
/// a region dropping out of the feed. The registry default (0) must
/// fill the gap downstream.
#[cfg(test)]
pub(crate) fn fixture_psi_missing_region_json() -> &'static str {
    r#"{
      "items": [{
        "readings": {
          "psi_twenty_four_hourly": { "north": 40, "south": 60, "east": 110, "central": 55 },
          "pm25_twenty_four_hourly": { "north": 14, "south": 22, "east": 48, "central": 19 }
        }
      }]
    }"#
}

/// UV index time series, most recent entry first.
#[cfg(test)]
pub(crate) fn fixture_uv_json() -> &'static str {
    r#"{
      "items": [{
        "timestamp": "2024-06-01T13:00:00+08:00",
        "update_timestamp": "2024-06-01T13:08:00+08:00",
        "index": [
          { "value": 8, "timestamp": "2024-06-01T13:00:00+08:00" },
          { "value": 10, "timestamp": "2024-06-01T12:00:00+08:00" },
          { "value": 9, "timestamp": "2024-06-01T11:00:00+08:00" }
        ]
      }]
    }"#
}

/// Air temperature: three stations averaging 30.0 °C.
#[cfg(test)]
pub(crate) fn fixture_temperature_json() -> &'static str {
    r#"{
      "metadata": {
        "stations": [
          { "id": "S109", "name": "Ang Mo Kio Avenue 5", "location": { "latitude": 1.3764, "longitude": 103.8492 } }
        ]
      },
      "items": [{
        "timestamp": "2024-06-01T13:35:00+08:00",
        "readings": [
          { "station_id": "S109", "value": 29.4 },
          { "station_id": "S24", "value": 31.2 },
          { "station_id": "S60", "value": 29.4 }
        ]
      }]
    }"#
}

/// Relative humidity: three stations averaging 84.0 %.
#[cfg(test)]
pub(crate) fn fixture_humidity_json() -> &'static str {
    r#"{
      "items": [{
        "timestamp": "2024-06-01T13:35:00+08:00",
        "readings": [
          { "station_id": "S109", "value": 78.5 },
          { "station_id": "S24", "value": 83.4 },
          { "station_id": "S60", "value": 90.1 }
        ]
      }]
    }"#
}

/// 24-hour forecast: general outlook plus one regional period.
#[cfg(test)]
pub(crate) fn fixture_outlook_json() -> &'static str {
    r#"{
      "items": [{
        "timestamp": "2024-06-01T12:00:00+08:00",
        "general": {
          "forecast": "Thundery Showers",
          "relative_humidity": { "low": 60, "high": 95 },
          "temperature": { "low": 25, "high": 33 },
          "wind": { "speed": { "low": 10, "high": 20 }, "direction": "SSE" }
        },
        "periods": [{
          "time": { "start": "2024-06-01T12:00:00+08:00", "end": "2024-06-01T18:00:00+08:00" },
          "regions": {
            "west": "Partly Cloudy (Day)",
            "east": "Thundery Showers",
            "central": "Thundery Showers",
            "south": "Partly Cloudy (Day)",
            "north": "Partly Cloudy (Day)"
          }
        }]
      }]
    }"#
}

/// The structurally-absent case: a well-formed JSON object with none of
/// the expected fields. Every adapter must map this to its documented
/// defaults rather than failing.
#[cfg(test)]
pub(crate) fn fixture_empty_json() -> &'static str {
    "{}"
}
