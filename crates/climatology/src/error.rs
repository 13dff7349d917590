//! Error types for the tethys-climatology crate.

use tethys_calendar::CalendarError;

/// Error type for all fallible operations in the tethys-climatology crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClimatologyError {
    /// Returned when paired sequences have different lengths.
    #[error("length mismatch: expected {expected}, got {got} for {field}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
        /// Name of the mismatched input.
        field: String,
    },

    /// Returned when a relative delta is requested against a zero baseline.
    #[error("zero historical value at index {index}: relative change is undefined")]
    ZeroBaseline {
        /// Position of the zero value in the historical sequence.
        index: usize,
    },

    /// Returned when a year range is inverted.
    #[error("invalid year range: start {start} is after end {end}")]
    InvalidRange {
        /// First year of the range.
        start: i32,
        /// Last year of the range.
        end: i32,
    },

    /// Returned when a year range contains no usable values for a month.
    #[error("no data for month {month} in years {start}..={end}")]
    EmptyRange {
        /// Calendar month without data.
        month: u8,
        /// First year of the range.
        start: i32,
        /// Last year of the range.
        end: i32,
    },

    /// Returned when a monthly series does not cover whole years.
    #[error("monthly series of length {len} does not cover whole years")]
    PartialYear {
        /// Number of monthly values supplied.
        len: usize,
    },

    /// Returned when an ensemble has no members.
    #[error("ensemble has no members")]
    EmptyEnsemble,

    /// Returned when a percentile is outside 0..=100.
    #[error("invalid percentile: {percentile} (must be within 0..=100)")]
    InvalidPercentile {
        /// The rejected percentile.
        percentile: f64,
    },

    /// Returned when a climatology store is created without room for entries.
    #[error("store capacity must be at least 1")]
    ZeroCapacity,

    /// Wrapped error from the calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
