//! Primitive morphing transforms.
//!
//! Each transform has a scalar form and an hourly form. The hourly form
//! gathers each monthly table onto the hours through the dense month index,
//! evaluates the scalar form and rounds the result to [`OUTPUT_DECIMALS`].

use tethys_calendar::{HOURS_PER_YEAR, MonthKeyed, month_index};
use tethys_stats::round_to;

use crate::error::MorphError;

/// Decimal places kept in morphed series.
pub const OUTPUT_DECIMALS: i32 = 2;

/// `x + delta`.
pub fn shift(x: f64, delta: f64) -> f64 {
    x + delta
}

/// `x * factor`.
pub fn stretch(x: f64, factor: f64) -> f64 {
    x * factor
}

/// `x + delta + scale * (x - mean)`.
pub fn shift_stretch(x: f64, delta: f64, scale: f64, mean: f64) -> f64 {
    x + delta + scale * (x - mean)
}

/// Checks that `values` covers the 8760-hour year.
pub(crate) fn check_hourly(values: &[f64], field: &str) -> Result<(), MorphError> {
    if values.len() != HOURS_PER_YEAR {
        return Err(MorphError::LengthMismatch {
            expected: HOURS_PER_YEAR,
            got: values.len(),
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Rounds every value to [`OUTPUT_DECIMALS`].
pub(crate) fn round_series(values: &mut [f64]) {
    for v in values.iter_mut() {
        *v = round_to(*v, OUTPUT_DECIMALS);
    }
}

/// Spreads a monthly table onto the 8760 hours of the year.
///
/// # Errors
///
/// Returns [`MorphError::Calendar`] if the month index holds an invalid month.
pub(crate) fn hourly(table: &MonthKeyed) -> Result<Vec<f64>, MorphError> {
    Ok(table.gather(&month_index())?)
}

/// Rounds and returns a finished series.
fn finish(mut out: Vec<f64>) -> Vec<f64> {
    round_series(&mut out);
    out
}

/// Shifts every hour by its month's delta.
///
/// # Errors
///
/// Returns [`MorphError::LengthMismatch`] unless `present` has 8760 values.
pub fn shift_series(present: &[f64], deltas: &MonthKeyed, field: &str) -> Result<Vec<f64>, MorphError> {
    check_hourly(present, field)?;
    let d = hourly(deltas)?;
    Ok(finish(present.iter().zip(&d).map(|(&x, &d)| shift(x, d)).collect()))
}

/// Stretches every hour by its month's factor.
///
/// # Errors
///
/// Returns [`MorphError::LengthMismatch`] unless `present` has 8760 values.
pub fn stretch_series(
    present: &[f64],
    factors: &MonthKeyed,
    field: &str,
) -> Result<Vec<f64>, MorphError> {
    check_hourly(present, field)?;
    let f = hourly(factors)?;
    Ok(finish(present.iter().zip(&f).map(|(&x, &f)| stretch(x, f)).collect()))
}

/// Shift-stretches every hour with its month's delta, scale and mean.
///
/// # Errors
///
/// Returns [`MorphError::LengthMismatch`] unless `present` has 8760 values.
pub fn shift_stretch_series(
    present: &[f64],
    deltas: &MonthKeyed,
    scales: &MonthKeyed,
    means: &MonthKeyed,
    field: &str,
) -> Result<Vec<f64>, MorphError> {
    check_hourly(present, field)?;
    let (d, s, mu) = (hourly(deltas)?, hourly(scales)?, hourly(means)?);
    Ok(finish(
        (0..present.len())
            .map(|i| shift_stretch(present[i], d[i], s[i], mu[i]))
            .collect(),
    ))
}
