//! Month- and day-keyed tables built from ordered sequences.
//!
//! A 12-value sequence becomes a table keyed by calendar month 1..=12 and a
//! 365-value sequence a table keyed by day-of-year 1..=365. Lengths are
//! checked up front: a sequence of the wrong length is a
//! [`CalendarError::Shape`] error, never a silent partial zip.

use crate::doy::DAYS_PER_YEAR;
use crate::error::CalendarError;

/// A value per calendar month, keyed 1..=12 in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthKeyed<T = f64> {
    values: [T; 12],
}

impl<T: Copy> MonthKeyed<T> {
    /// Builds the table from an ordered slice (January first).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Shape`] unless `values.len() == 12`.
    pub fn from_slice(values: &[T]) -> Result<Self, CalendarError> {
        let values: [T; 12] = values.try_into().map_err(|_| CalendarError::Shape {
            expected: 12,
            got: values.len(),
        })?;
        Ok(Self { values })
    }

    /// Builds the table from a fixed-size array (January first).
    pub fn from_array(values: [T; 12]) -> Self {
        Self { values }
    }

    /// Builds the table by evaluating `f` for each month 1..=12.
    pub fn from_fn(mut f: impl FnMut(u8) -> T) -> Self {
        Self {
            values: std::array::from_fn(|i| f(i as u8 + 1)),
        }
    }

    /// Returns the value for `month` (1..=12).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is out of range.
    pub fn get(&self, month: u8) -> Result<T, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(self.values[(month - 1) as usize])
    }

    /// Returns the underlying values, January first.
    pub fn values(&self) -> &[T; 12] {
        &self.values
    }

    /// Iterates `(month, value)` pairs in month order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, T)> + '_ {
        self.values.iter().enumerate().map(|(i, &v)| (i as u8 + 1, v))
    }

    /// Returns the months present as keys (always 1..=12).
    pub fn keys(&self) -> impl Iterator<Item = u8> {
        1..=12u8
    }

    /// Applies `f` to every month's value.
    pub fn map<U: Copy>(&self, mut f: impl FnMut(T) -> U) -> MonthKeyed<U> {
        MonthKeyed {
            values: std::array::from_fn(|i| f(self.values[i])),
        }
    }

    /// Gathers one value per entry of `month_index`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] on the first out-of-range month.
    pub fn gather(&self, month_index: &[u8]) -> Result<Vec<T>, CalendarError> {
        month_index.iter().map(|&m| self.get(m)).collect()
    }
}

/// A value per day of the year, keyed 1..=365 in order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayKeyed<T = f64> {
    values: Vec<T>,
}

impl<T: Copy> DayKeyed<T> {
    /// Builds the table from an ordered slice (January 1 first).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Shape`] unless `values.len() == 365`.
    pub fn from_slice(values: &[T]) -> Result<Self, CalendarError> {
        if values.len() != DAYS_PER_YEAR {
            return Err(CalendarError::Shape {
                expected: DAYS_PER_YEAR,
                got: values.len(),
            });
        }
        Ok(Self {
            values: values.to_vec(),
        })
    }

    /// Returns the value for day-of-year `doy` (1..=365).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is out of range.
    pub fn get(&self, doy: u16) -> Result<T, CalendarError> {
        if !(1..=DAYS_PER_YEAR as u16).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(self.values[(doy - 1) as usize])
    }

    /// Returns the underlying values, January 1 first.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterates `(doy, value)` pairs in day order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, T)> + '_ {
        self.values.iter().enumerate().map(|(i, &v)| (i as u16 + 1, v))
    }
}
