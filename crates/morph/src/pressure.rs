//! Atmospheric pressure morph.

use tethys_climatology::ClimatologyPair;

use crate::error::MorphError;
use crate::transform::shift_series;
use crate::variable::Field;

/// Shifts hourly station pressure by the monthly change in sea-level
/// pressure.
///
/// # Errors
///
/// Returns [`MorphError::LengthMismatch`] unless `present` has 8760 values.
pub fn morph_pressure(present: &[f64], psl: &ClimatologyPair) -> Result<Vec<f64>, MorphError> {
    shift_series(present, &psl.absolute_delta(), Field::AtmosphericPressure.key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tethys_calendar::{HOURS_PER_YEAR, MonthKeyed};

    #[test]
    fn pressure_is_shifted_per_month() {
        let present = vec![101_000.0; HOURS_PER_YEAR];
        let psl = ClimatologyPair::new(
            MonthKeyed::from_array([101_300.0; 12]),
            MonthKeyed::from_fn(|m| 101_300.0 + if m == 7 { -150.0 } else { 50.0 }),
        );
        let out = morph_pressure(&present, &psl).unwrap();
        assert_eq!(out[0], 101_050.0);
        // July 1 starts at day 182 -> hour 181 * 24.
        assert_eq!(out[181 * 24], 100_850.0);
    }
}
