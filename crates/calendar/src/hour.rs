//! Hour-of-year indexing for annual hourly series.
//!
//! Index `i` in an 8760-length series always refers to the same calendar
//! hour: day-of-year `i / 24 + 1`, clock hour `i % 24`, independent of the
//! physical year the record was measured in.

use crate::doy::{DAYS_PER_MONTH, DAYS_PER_YEAR, Doy};
use crate::error::CalendarError;

/// Hours in a day.
pub const HOURS_PER_DAY: usize = 24;

/// Length of every annual hourly series.
pub const HOURS_PER_YEAR: usize = DAYS_PER_YEAR * HOURS_PER_DAY;

/// Position of an hour within the 8760-hour year (0..8760).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourOfYear(u16);

impl HourOfYear {
    /// Creates a new `HourOfYear` from a 0-based index.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidHour`] if `index >= 8760`.
    pub fn new(index: usize) -> Result<Self, CalendarError> {
        if index >= HOURS_PER_YEAR {
            return Err(CalendarError::InvalidHour { hour: index });
        }
        Ok(Self(index as u16))
    }

    /// Returns the 0-based index (0..8760).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the clock hour within the day (0..=23).
    pub fn hour(self) -> u8 {
        (self.index() % HOURS_PER_DAY) as u8
    }

    /// Returns the day-of-year containing this hour.
    pub fn doy(self) -> Doy {
        Doy::from_index_unchecked(self.index() / HOURS_PER_DAY)
    }

    /// Returns the calendar month (1..=12) containing this hour.
    pub fn month(self) -> u8 {
        self.doy().month()
    }
}

/// Returns the calendar month (1..=12) of every hour of the year.
///
/// This is the dense join key for month-keyed factors: compute it once and
/// gather against a 12-entry table instead of resolving months per row.
pub fn month_index() -> Vec<u8> {
    let mut out = Vec::with_capacity(HOURS_PER_YEAR);
    for m in 1..=12u8 {
        let hours = DAYS_PER_MONTH[m as usize] as usize * HOURS_PER_DAY;
        out.extend(std::iter::repeat_n(m, hours));
    }
    out
}

/// Returns the 0-based day index (0..=364) of every hour of the year.
pub fn day_index() -> Vec<usize> {
    (0..HOURS_PER_YEAR).map(|i| i / HOURS_PER_DAY).collect()
}

/// Returns the number of hours in `month`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn hours_in_month(month: u8) -> Result<usize, CalendarError> {
    crate::doy::days_in_month(month).map(|d| d as usize * HOURS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(HOURS_PER_YEAR, 8760);
    }

    #[test]
    fn new_bounds() {
        assert!(HourOfYear::new(0).is_ok());
        assert!(HourOfYear::new(8759).is_ok());
        assert_eq!(
            HourOfYear::new(8760),
            Err(CalendarError::InvalidHour { hour: 8760 })
        );
    }

    #[test]
    fn first_and_last_hour() {
        let first = HourOfYear::new(0).unwrap();
        assert_eq!(first.hour(), 0);
        assert_eq!(first.doy().get(), 1);
        assert_eq!(first.month(), 1);

        let last = HourOfYear::new(8759).unwrap();
        assert_eq!(last.hour(), 23);
        assert_eq!(last.doy().get(), 365);
        assert_eq!(last.month(), 12);
    }

    #[test]
    fn february_first_hour() {
        // Jan has 31 * 24 = 744 hours.
        let h = HourOfYear::new(744).unwrap();
        assert_eq!(h.month(), 2);
        assert_eq!(h.doy().get(), 32);
        assert_eq!(h.hour(), 0);
    }

    #[test]
    fn month_index_shape_and_agreement() {
        let idx = month_index();
        assert_eq!(idx.len(), HOURS_PER_YEAR);
        for (i, &m) in idx.iter().enumerate().step_by(97) {
            assert_eq!(HourOfYear::new(i).unwrap().month(), m, "hour {i}");
        }
        assert_eq!(idx[0], 1);
        assert_eq!(idx[743], 1);
        assert_eq!(idx[744], 2);
        assert_eq!(idx[8759], 12);
    }

    #[test]
    fn day_index_shape() {
        let idx = day_index();
        assert_eq!(idx.len(), HOURS_PER_YEAR);
        assert_eq!(idx[23], 0);
        assert_eq!(idx[24], 1);
        assert_eq!(idx[8759], 364);
    }

    #[test]
    fn hours_in_month_values() {
        assert_eq!(hours_in_month(1).unwrap(), 744);
        assert_eq!(hours_in_month(2).unwrap(), 672);
        assert_eq!(hours_in_month(4).unwrap(), 720);
        assert!(hours_in_month(13).is_err());
        let total: usize = (1..=12).map(|m| hours_in_month(m).unwrap()).sum();
        assert_eq!(total, HOURS_PER_YEAR);
    }
}
