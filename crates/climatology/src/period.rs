//! Future climatology windows.

use crate::model::YearRange;

/// The future window of the same extent as `baseline`, centred on `year`.
///
/// Bounds are `year ∓ extent / 2` truncated toward zero, so an odd extent
/// (a 30-year baseline such as 1985..=2014) loses half a year on the left.
pub fn future_period(year: i32, baseline: YearRange) -> YearRange {
    let half = f64::from(baseline.extent()) / 2.0;
    let start = (f64::from(year) - half) as i32;
    let end = (f64::from(year) + half) as i32;
    // start <= end because half >= 0
    YearRange::new(start, end).unwrap_or(baseline)
}
