//! Hourly and daily clearness index.

use tethys_calendar::{DayKeyed, HOURS_PER_DAY, HOURS_PER_YEAR};
use tethys_stats::ratio_or_zero;

use crate::error::SolarError;

/// Clearness of an 8760-hour record.
#[derive(Debug, Clone, PartialEq)]
pub struct Clearness {
    hourly: Vec<f64>,
    daily: DayKeyed,
}

impl Clearness {
    /// Hourly `glohor / exthor`, 0 where `exthor` is 0.
    pub fn hourly(&self) -> &[f64] {
        &self.hourly
    }

    /// Daily summed `glohor / exthor`, keyed 1..=365.
    pub fn daily(&self) -> &DayKeyed {
        &self.daily
    }

    /// The daily clearness repeated for every hour of its day.
    pub fn daily_per_hour(&self) -> Vec<f64> {
        self.daily
            .values()
            .iter()
            .flat_map(|&v| std::iter::repeat_n(v, HOURS_PER_DAY))
            .collect()
    }
}

fn check_len(values: &[f64], field: &str) -> Result<(), SolarError> {
    if values.len() != HOURS_PER_YEAR {
        return Err(SolarError::LengthMismatch {
            expected: HOURS_PER_YEAR,
            got: values.len(),
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Computes hourly and daily clearness from global and extraterrestrial
/// horizontal radiation.
///
/// # Errors
///
/// Returns [`SolarError::LengthMismatch`] unless both inputs have 8760 values.
pub fn clearness(glohor: &[f64], exthor: &[f64]) -> Result<Clearness, SolarError> {
    check_len(glohor, "glohor")?;
    check_len(exthor, "exthor")?;

    let hourly = glohor
        .iter()
        .zip(exthor)
        .map(|(&g, &e)| ratio_or_zero(g, e))
        .collect();

    let daily: Vec<f64> = glohor
        .chunks_exact(HOURS_PER_DAY)
        .zip(exthor.chunks_exact(HOURS_PER_DAY))
        .map(|(g, e)| ratio_or_zero(g.iter().sum(), e.iter().sum()))
        .collect();

    Ok(Clearness {
        hourly,
        daily: DayKeyed::from_slice(&daily)?,
    })
}
