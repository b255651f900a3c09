/// Heat index ("feels like" temperature) computation.
///
/// Implements the NWS heat index: a linear approximation below 80 °F
/// and the Rothfusz regression polynomial above, with the two standard
/// corrections for very dry and very humid air near the low end of the
/// regression's validity window. Input and output are Celsius; the
/// regression itself works in Fahrenheit.
///
/// Reference: https://www.wpc.ncep.noaa.gov/html/heatindex_equation.shtml

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Computes the feels-like temperature in °C from air temperature (°C)
/// and relative humidity (%), rounded to 1 decimal place.
pub fn heat_index(temp_c: f64, humidity: f64) -> f64 {
    let temp_f = temp_c * 9.0 / 5.0 + 32.0;

    let hi_f = if temp_f < 80.0 {
        // Simple formula for lower temperatures.
        0.5 * (temp_f + 61.0 + (temp_f - 68.0) * 1.2 + humidity * 0.094)
    } else {
        let mut hi = rothfusz(temp_f, humidity);

        // Dry-air correction, valid for RH < 13% and 80-112 °F. The
        // radicand goes negative once |F - 95| exceeds 17; clamp it to
        // zero there so the correction fades out instead of producing NaN.
        if humidity < 13.0 && (80.0..=112.0).contains(&temp_f) {
            let radicand = ((17.0 - (temp_f - 95.0).abs()) / 17.0).max(0.0);
            hi -= (13.0 - humidity) / 4.0 * radicand.sqrt();
        }

        // Humid-air correction, valid for RH > 85% and 80-87 °F.
        if humidity > 85.0 && (80.0..=87.0).contains(&temp_f) {
            hi += (humidity - 85.0) / 10.0 * ((87.0 - temp_f) / 5.0);
        }

        hi
    };

    let hi_c = (hi_f - 32.0) * 5.0 / 9.0;
    (hi_c * 10.0).round() / 10.0
}

/// The Rothfusz regression polynomial, in Fahrenheit.
fn rothfusz(temp_f: f64, humidity: f64) -> f64 {
    -42.379
        + 2.04901523 * temp_f
        + 10.14333127 * humidity
        - 0.22475541 * temp_f * humidity
        - 0.00683783 * temp_f * temp_f
        - 0.05481717 * humidity * humidity
        + 0.00122874 * temp_f * temp_f * humidity
        + 0.00085282 * temp_f * humidity * humidity
        - 0.00000199 * temp_f * temp_f * humidity * humidity
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
