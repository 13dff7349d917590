//! Wind speed morph.

use tethys_calendar::MonthKeyed;
use tethys_climatology::{ClimatologyPair, monthly_relative_delta};

use crate::error::MorphError;
use crate::transform::stretch_series;
use crate::variable::Field;

/// Monthly wind speed `hypot(u, v)` of two component climatologies.
pub fn wind_speed(u: &MonthKeyed, v: &MonthKeyed) -> MonthKeyed {
    MonthKeyed::from_fn(|m| {
        let i = (m - 1) as usize;
        u.values()[i].hypot(v.values()[i])
    })
}

/// Stretches hourly wind speed by the monthly relative change in model
/// wind speed built from the eastward and northward components.
///
/// # Errors
///
/// Returns [`MorphError::Climatology`] if a baseline month has zero wind
/// speed and [`MorphError::LengthMismatch`] for a series of the wrong length.
pub fn morph_wind_speed(
    present: &[f64],
    uas: &ClimatologyPair,
    vas: &ClimatologyPair,
) -> Result<Vec<f64>, MorphError> {
    let baseline = wind_speed(uas.baseline(), vas.baseline());
    let future = wind_speed(uas.future(), vas.future());
    let factors = monthly_relative_delta(&future, &baseline)?;
    stretch_series(present, &factors, Field::WindSpeed.key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tethys_calendar::HOURS_PER_YEAR;

    fn pair(base: f64, fut: f64) -> ClimatologyPair {
        ClimatologyPair::new(MonthKeyed::from_array([base; 12]), MonthKeyed::from_array([fut; 12]))
    }

    #[test]
    fn doubling_model_speed_doubles_wind() {
        // 4 m/s baseline speed (u only) doubling to 8 m/s.
        let present = vec![5.0; HOURS_PER_YEAR];
        let out = morph_wind_speed(&present, &pair(4.0, 8.0), &pair(0.0, 0.0)).unwrap();
        assert!(out.iter().all(|&v| v == 10.0));
    }

    #[test]
    fn speed_uses_both_components() {
        let s = wind_speed(
            &MonthKeyed::from_array([3.0; 12]),
            &MonthKeyed::from_array([-4.0; 12]),
        );
        assert_eq!(s.get(5).unwrap(), 5.0);
    }

    #[test]
    fn calm_baseline_is_error() {
        let present = vec![1.0; HOURS_PER_YEAR];
        assert!(morph_wind_speed(&present, &pair(0.0, 1.0), &pair(0.0, 1.0)).is_err());
    }
}
