//! Dry-bulb temperature morph.
//!
//! Shifts each hour by the monthly change in mean temperature and stretches
//! its departure from the monthly mean by the ratio of the change in
//! diurnal range to the present diurnal range.

use tethys_calendar::MonthKeyed;
use tethys_climatology::{ClimatologyPair, present_monthly_stats};
use tethys_stats::ratio_or_zero;
use tracing::warn;

use crate::error::MorphError;
use crate::transform::{check_hourly, shift_stretch_series};
use crate::variable::Field;

/// Monthly diurnal-range scale factors.
///
/// `(Δtasmax - Δtasmin) / (present_max_mean - present_min_mean)`, or 0 for
/// a month whose present diurnal range is 0.
pub fn temperature_scale(
    tasmax: &ClimatologyPair,
    tasmin: &ClimatologyPair,
    present_max_mean: &MonthKeyed,
    present_min_mean: &MonthKeyed,
) -> MonthKeyed {
    let dmax = tasmax.absolute_delta();
    let dmin = tasmin.absolute_delta();
    MonthKeyed::from_fn(|m| {
        let i = (m - 1) as usize;
        let range = present_max_mean.values()[i] - present_min_mean.values()[i];
        if range == 0.0 {
            warn!(month = m, "present diurnal range is zero; temperature scale set to 0");
        }
        ratio_or_zero(dmax.values()[i] - dmin.values()[i], range)
    })
}

/// Morphs an hourly dry-bulb series.
///
/// # Errors
///
/// Returns [`MorphError::LengthMismatch`] unless `present` has 8760 values.
pub fn morph_dry_bulb(
    present: &[f64],
    tas: &ClimatologyPair,
    tasmax: &ClimatologyPair,
    tasmin: &ClimatologyPair,
) -> Result<Vec<f64>, MorphError> {
    check_hourly(present, Field::DryBulb.key())?;
    let stats = present_monthly_stats(present)?;
    let delta = tas.absolute_delta();
    let scale = temperature_scale(tasmax, tasmin, stats.max_mean(), stats.min_mean());
    shift_stretch_series(present, &delta, &scale, stats.mean(), Field::DryBulb.key())
}
