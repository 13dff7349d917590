//! Day-of-year newtype and month tables for the 365-day year.

use crate::error::CalendarError;

/// Number of days in the calendar year (no leap day).
pub const DAYS_PER_YEAR: usize = 365;

/// Number of days in each month (index 0 unused, index 1 = January, ..., index 12 = December).
pub const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-of-year on which each month starts (index 0 unused, index 1 = January starts at DOY 1, ...).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

/// Day-of-year in the 365-day calendar (1..=365).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

impl Doy {
    /// Creates a new `Doy` from a day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=365.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if !(1..=DAYS_PER_YEAR as u16).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(Self(doy))
    }

    /// Creates a `Doy` from a 0-based day index (0..=364).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `index` is 365 or more.
    pub fn from_index(index: usize) -> Result<Self, CalendarError> {
        if index >= DAYS_PER_YEAR {
            return Err(CalendarError::InvalidDoy {
                doy: u16::try_from(index + 1).unwrap_or(u16::MAX),
            });
        }
        Ok(Self(index as u16 + 1))
    }

    /// Index must already be known to lie in 0..=364.
    pub(crate) fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < DAYS_PER_YEAR);
        Self(index as u16 + 1)
    }

    /// Returns the inner day-of-year value (1..=365).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index suitable for array indexing (0..=364).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns the month (1..=12) containing this day.
    pub fn month(self) -> u8 {
        // Last month whose start day is not after this day.
        (1..=12u8)
            .rev()
            .find(|&m| MONTH_START_DOY[m as usize] <= self.0)
            .unwrap_or(1)
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        (self.0 - MONTH_START_DOY[self.month() as usize] + 1) as u8
    }
}

/// Returns the number of days in `month`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(DAYS_PER_MONTH[month as usize])
}
