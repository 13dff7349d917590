//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering every problem found in a
//! document into a single [`IoError::Validation`], plus helpers for the
//! length checks shared by the document readers.

use tethys_calendar::HOURS_PER_YEAR;

use crate::error::IoError;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Records an error unless `values` covers the 8760-hour year.
pub(crate) fn check_hourly(c: &mut ValidationCollector, name: &str, values: &[f64]) {
    if values.len() != HOURS_PER_YEAR {
        c.push(format!(
            "{name} has {} values, expected {HOURS_PER_YEAR}",
            values.len()
        ));
    }
}

/// Records an error unless `values` holds whole years of monthly data.
pub(crate) fn check_whole_years(c: &mut ValidationCollector, name: &str, values: &[f64]) {
    if values.is_empty() || values.len() % 12 != 0 {
        c.push(format!(
            "{name} has {} monthly values, expected a non-zero multiple of 12",
            values.len()
        ));
    }
}
