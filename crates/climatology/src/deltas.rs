//! Change factors between a historical and a future climatology.
//!
//! Absolute deltas (`future - historical`) drive additive variables such as
//! temperature and pressure; relative deltas (`future / historical`) drive
//! multiplicative ones such as humidity and wind speed.

use crate::error::ClimatologyError;
use tethys_calendar::MonthKeyed;

/// Absolute change of a single value.
pub fn absolute_change(future: f64, historical: f64) -> f64 {
    future - historical
}

/// Relative change of a single value.
///
/// # Errors
///
/// Returns [`ClimatologyError::ZeroBaseline`] (index 0) when `historical` is zero.
pub fn relative_change(future: f64, historical: f64) -> Result<f64, ClimatologyError> {
    if historical == 0.0 {
        return Err(ClimatologyError::ZeroBaseline { index: 0 });
    }
    Ok(future / historical)
}

fn check_lengths(future: &[f64], historical: &[f64]) -> Result<(), ClimatologyError> {
    if future.len() != historical.len() {
        return Err(ClimatologyError::LengthMismatch {
            expected: future.len(),
            got: historical.len(),
            field: "historical".to_string(),
        });
    }
    Ok(())
}

/// Elementwise `future - historical`.
///
/// # Errors
///
/// Returns [`ClimatologyError::LengthMismatch`] if the sequences differ in length.
pub fn absolute_delta(future: &[f64], historical: &[f64]) -> Result<Vec<f64>, ClimatologyError> {
    check_lengths(future, historical)?;
    Ok(future
        .iter()
        .zip(historical)
        .map(|(&f, &h)| absolute_change(f, h))
        .collect())
}

/// Elementwise `future / historical`.
///
/// # Errors
///
/// Returns [`ClimatologyError::LengthMismatch`] if the sequences differ in
/// length and [`ClimatologyError::ZeroBaseline`] at the first zero
/// historical value.
pub fn relative_delta(future: &[f64], historical: &[f64]) -> Result<Vec<f64>, ClimatologyError> {
    check_lengths(future, historical)?;
    future
        .iter()
        .zip(historical)
        .enumerate()
        .map(|(index, (&f, &h))| {
            if h == 0.0 {
                Err(ClimatologyError::ZeroBaseline { index })
            } else {
                Ok(f / h)
            }
        })
        .collect()
}

/// Month-keyed absolute delta.
pub fn monthly_absolute_delta(future: &MonthKeyed, historical: &MonthKeyed) -> MonthKeyed {
    MonthKeyed::from_fn(|m| {
        let i = (m - 1) as usize;
        absolute_change(future.values()[i], historical.values()[i])
    })
}

/// Month-keyed relative delta.
///
/// # Errors
///
/// Returns [`ClimatologyError::ZeroBaseline`] with the 0-based month index
/// of the first zero historical month.
pub fn monthly_relative_delta(
    future: &MonthKeyed,
    historical: &MonthKeyed,
) -> Result<MonthKeyed, ClimatologyError> {
    let ratios = relative_delta(future.values(), historical.values())?;
    Ok(MonthKeyed::from_slice(&ratios)?)
}
