//! Solar radiation morphs.
//!
//! Global horizontal radiation is stretched by the monthly change in model
//! surface shortwave radiation relative to the present monthly mean. The
//! diffuse and direct components are then rebuilt from the morphed global
//! radiation so the three stay consistent.

use tethys_calendar::MonthKeyed;
use tethys_climatology::{ClimatologyPair, monthly_mean};
use tethys_solar::{
    Location, SolarGeometry, horizontal_extraterrestrial, split_global,
    sunrise_sunset_markers,
};

use crate::error::MorphError;
use crate::transform::{check_hourly, round_series, stretch_series};
use crate::variable::Field;

/// Monthly stretch factors `1 + Δrsds / present_mean`, 1 for a month whose
/// present mean is 0.
pub fn global_horizontal_factors(rsds: &ClimatologyPair, present_mean: &MonthKeyed) -> MonthKeyed {
    let delta = rsds.absolute_delta();
    MonthKeyed::from_fn(|m| {
        let i = (m - 1) as usize;
        let mean = present_mean.values()[i];
        if mean == 0.0 {
            1.0
        } else {
            1.0 + delta.values()[i] / mean
        }
    })
}

/// Morphs hourly global horizontal radiation.
///
/// # Errors
///
/// Returns [`MorphError::LengthMismatch`] unless `present` has 8760 values.
pub fn morph_global_horizontal(
    present: &[f64],
    rsds: &ClimatologyPair,
) -> Result<Vec<f64>, MorphError> {
    check_hourly(present, Field::GlobalHorizontal.key())?;
    let mean = monthly_mean(present)?;
    let factors = global_horizontal_factors(rsds, &mean);
    stretch_series(present, &factors, Field::GlobalHorizontal.key())
}

/// Rebuilds diffuse horizontal and direct normal radiation from morphed
/// global horizontal radiation, returning `(diffuse, direct)`.
///
/// When `exthor` is `None` the extraterrestrial horizontal radiation is
/// computed from the site geometry.
///
/// # Errors
///
/// Returns [`MorphError::LengthMismatch`] or a wrapped
/// [`tethys_solar::SolarError`] for inputs not covering the year.
pub fn decompose_radiation(
    glohor: &[f64],
    exthor: Option<&[f64]>,
    location: &Location,
) -> Result<(Vec<f64>, Vec<f64>), MorphError> {
    check_hourly(glohor, Field::GlobalHorizontal.key())?;
    let geometry = SolarGeometry::compute(location);
    let markers = sunrise_sunset_markers(location);
    let computed;
    let exthor = match exthor {
        Some(e) => e,
        None => {
            computed = horizontal_extraterrestrial(&geometry);
            &computed
        }
    };
    let parts = split_global(glohor, exthor, &geometry, &markers)?;
    let (diffuse, mut direct) = parts.into_parts();
    round_series(&mut direct);
    Ok((diffuse, direct))
}
