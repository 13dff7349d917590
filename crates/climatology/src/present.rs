//! Monthly statistics of a present-day hourly record.
//!
//! Statistics are bucket-then-mean: hours are grouped into days, a daily
//! value is taken, and the daily values of each month are averaged.

use crate::error::ClimatologyError;
use tethys_calendar::{DAYS_PER_MONTH, HOURS_PER_DAY, HOURS_PER_YEAR, MonthKeyed};

/// Monthly means of daily maxima, minima and means of an hourly series.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentStats {
    max_mean: MonthKeyed,
    min_mean: MonthKeyed,
    mean: MonthKeyed,
}

impl PresentStats {
    /// Monthly mean of daily maxima.
    pub fn max_mean(&self) -> &MonthKeyed {
        &self.max_mean
    }

    /// Monthly mean of daily minima.
    pub fn min_mean(&self) -> &MonthKeyed {
        &self.min_mean
    }

    /// Monthly mean of daily means.
    pub fn mean(&self) -> &MonthKeyed {
        &self.mean
    }
}

fn check_hourly(series: &[f64]) -> Result<(), ClimatologyError> {
    if series.len() != HOURS_PER_YEAR {
        return Err(ClimatologyError::LengthMismatch {
            expected: HOURS_PER_YEAR,
            got: series.len(),
            field: "hourly series".to_string(),
        });
    }
    Ok(())
}

/// Averages 365 daily values into 12 monthly values.
fn month_means(daily: &[f64]) -> MonthKeyed {
    let mut out = [0.0; 12];
    let mut start = 0;
    for (i, slot) in out.iter_mut().enumerate() {
        let days = DAYS_PER_MONTH[i + 1] as usize;
        *slot = tethys_stats::mean(&daily[start..start + days]);
        start += days;
    }
    MonthKeyed::from_array(out)
}

/// Computes [`PresentStats`] for an 8760-hour series.
///
/// # Errors
///
/// Returns [`ClimatologyError::LengthMismatch`] unless `series` has 8760 values.
pub fn present_monthly_stats(series: &[f64]) -> Result<PresentStats, ClimatologyError> {
    check_hourly(series)?;
    let days = series.chunks_exact(HOURS_PER_DAY);
    let mut daily_max = Vec::with_capacity(days.len());
    let mut daily_min = Vec::with_capacity(days.len());
    let mut daily_mean = Vec::with_capacity(days.len());
    for day in days {
        daily_max.push(tethys_stats::max(day));
        daily_min.push(tethys_stats::min(day));
        daily_mean.push(tethys_stats::mean(day));
    }
    Ok(PresentStats {
        max_mean: month_means(&daily_max),
        min_mean: month_means(&daily_min),
        mean: month_means(&daily_mean),
    })
}

/// Monthly mean of an 8760-hour series (hours to daily means to month means).
///
/// # Errors
///
/// Returns [`ClimatologyError::LengthMismatch`] unless `series` has 8760 values.
pub fn monthly_mean(series: &[f64]) -> Result<MonthKeyed, ClimatologyError> {
    check_hourly(series)?;
    let daily: Vec<f64> = series
        .chunks_exact(HOURS_PER_DAY)
        .map(tethys_stats::mean)
        .collect();
    Ok(month_means(&daily))
}
