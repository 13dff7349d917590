//! Clearness persistence.
//!
//! Persistence is the clearness of the hours around an hour, taken from the
//! original hourly clearness (never from already computed persistence).

use crate::error::SolarError;
use crate::sun_events::SunMarker;

/// Persistence of every hour.
///
/// * first/last hour of the year: its own clearness
/// * sunrise: the next hour
/// * sunset: the previous hour
/// * other: mean of the previous and next hour
///
/// Neighbours past either end of the series fall back to the hour itself.
///
/// # Errors
///
/// Returns [`SolarError::LengthMismatch`] if `markers` and `hourly_clearness`
/// differ in length.
pub fn persistence(hourly_clearness: &[f64], markers: &[SunMarker]) -> Result<Vec<f64>, SolarError> {
    if markers.len() != hourly_clearness.len() {
        return Err(SolarError::LengthMismatch {
            expected: hourly_clearness.len(),
            got: markers.len(),
            field: "markers".to_string(),
        });
    }
    let n = hourly_clearness.len();
    let kt = hourly_clearness;

    Ok(markers
        .iter()
        .enumerate()
        .map(|(i, &marker)| {
            let prev = if i > 0 { kt[i - 1] } else { kt[i] };
            let next = if i + 1 < n { kt[i + 1] } else { kt[i] };
            match marker {
                SunMarker::FirstHour | SunMarker::LastHour => kt[i],
                SunMarker::Sunrise => next,
                SunMarker::Sunset => prev,
                SunMarker::Other => (prev + next) / 2.0,
            }
        })
        .collect())
}
