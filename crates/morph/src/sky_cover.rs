//! Total and opaque sky cover.
//!
//! Sky cover is recorded in tenths. Model cloud fraction is in percent, so
//! the monthly change is divided by 10 and truncated before shifting.

use tethys_calendar::MonthKeyed;
use tethys_climatology::ClimatologyPair;
use tethys_stats::{clip, ratio_or_zero, round_to};

use crate::error::MorphError;
use crate::transform::{OUTPUT_DECIMALS, check_hourly, hourly};
use crate::variable::Field;

/// Bounds of sky cover, tenths.
pub const SKY_COVER_RANGE: (f64, f64) = (0.0, 10.0);

/// Monthly shift in tenths: `trunc(Δclt / 10)`.
pub fn sky_cover_shift(clt: &ClimatologyPair) -> MonthKeyed {
    clt.absolute_delta().map(|d| (d / 10.0).trunc())
}

/// Shifts total sky cover, clips it to [`SKY_COVER_RANGE`] and truncates to
/// whole tenths.
///
/// # Errors
///
/// Returns [`MorphError::LengthMismatch`] unless `present` has 8760 values.
pub fn morph_total_sky_cover(present: &[f64], clt: &ClimatologyPair) -> Result<Vec<f64>, MorphError> {
    check_hourly(present, Field::TotalSkyCover.key())?;
    let shift = hourly(&sky_cover_shift(clt))?;
    let mut out: Vec<f64> = present.iter().zip(&shift).map(|(&x, &d)| x + d).collect();
    let (lo, hi) = SKY_COVER_RANGE;
    clip(&mut out, lo, hi);
    for v in &mut out {
        *v = v.trunc();
    }
    Ok(out)
}

/// Opaque sky cover keeping the present opaque-to-total ratio of each hour.
///
/// An hour whose present total cover is 0 gets opaque cover 0.
///
/// # Errors
///
/// Returns [`MorphError::LengthMismatch`] unless all series have 8760 values.
pub fn morph_opaque_sky_cover(
    morphed_total: &[f64],
    present_opaque: &[f64],
    present_total: &[f64],
) -> Result<Vec<f64>, MorphError> {
    check_hourly(morphed_total, Field::TotalSkyCover.key())?;
    check_hourly(present_opaque, Field::OpaqueSkyCover.key())?;
    check_hourly(present_total, Field::TotalSkyCover.key())?;
    Ok(morphed_total
        .iter()
        .zip(present_opaque.iter().zip(present_total))
        .map(|(&t, (&o, &pt))| round_to(t * ratio_or_zero(o, pt), OUTPUT_DECIMALS))
        .collect())
}
