//! Relative humidity and dew point.

use tethys_climatology::ClimatologyPair;
use tethys_stats::clip;

use crate::error::MorphError;
use crate::transform::{check_hourly, round_series, stretch_series};
use crate::variable::Field;

/// Bounds of a morphed relative humidity, %.
pub const RELATIVE_HUMIDITY_RANGE: (f64, f64) = (1.0, 100.0);

const MAGNUS_A: f64 = 17.27;
const MAGNUS_B: f64 = 237.7;

/// Morphs an hourly relative humidity series by the monthly relative change
/// in specific humidity, clipped to [`RELATIVE_HUMIDITY_RANGE`].
///
/// # Errors
///
/// Returns [`MorphError::Climatology`] if a baseline month of `huss` is zero
/// and [`MorphError::LengthMismatch`] for a series of the wrong length.
pub fn morph_relative_humidity(
    present: &[f64],
    huss: &ClimatologyPair,
) -> Result<Vec<f64>, MorphError> {
    let factors = huss.relative_delta()?;
    let mut out = stretch_series(present, &factors, Field::RelativeHumidity.key())?;
    let (lo, hi) = RELATIVE_HUMIDITY_RANGE;
    clip(&mut out, lo, hi);
    Ok(out)
}

/// Dew point (°C) from dry bulb (°C) and relative humidity (%) using the
/// Magnus approximation.
pub fn dew_point(dry_bulb: f64, relative_humidity: f64) -> f64 {
    let gamma = (relative_humidity / 100.0).ln() + MAGNUS_A * dry_bulb / (MAGNUS_B + dry_bulb);
    MAGNUS_B * gamma / (MAGNUS_A - gamma)
}

/// Hourly dew point from morphed dry bulb and relative humidity.
///
/// # Errors
///
/// Returns [`MorphError::LengthMismatch`] unless both inputs have 8760 values.
pub fn dew_point_series(dry_bulb: &[f64], relative_humidity: &[f64]) -> Result<Vec<f64>, MorphError> {
    check_hourly(dry_bulb, Field::DryBulb.key())?;
    check_hourly(relative_humidity, Field::RelativeHumidity.key())?;
    let mut out: Vec<f64> = dry_bulb
        .iter()
        .zip(relative_humidity)
        .map(|(&t, &rh)| dew_point(t, rh))
        .collect();
    round_series(&mut out);
    Ok(out)
}
