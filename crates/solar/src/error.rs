//! Error types for the tethys-solar crate.

use tethys_calendar::CalendarError;

/// Error type for all fallible operations in the tethys-solar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolarError {
    /// Returned when a latitude is outside -90..=90 or not finite.
    #[error("invalid latitude: {latitude} (must be within -90..=90)")]
    InvalidLatitude {
        /// The rejected latitude in degrees.
        latitude: f64,
    },

    /// Returned when a longitude is outside -180..=180 or not finite.
    #[error("invalid longitude: {longitude} (must be within -180..=180)")]
    InvalidLongitude {
        /// The rejected longitude in degrees.
        longitude: f64,
    },

    /// Returned when a UTC offset is outside -12..=14 hours or not finite.
    #[error("invalid UTC offset: {offset} hours (must be within -12..=14)")]
    InvalidUtcOffset {
        /// The rejected offset in hours.
        offset: f64,
    },

    /// Returned when hourly inputs have the wrong length.
    #[error("length mismatch: expected {expected}, got {got} for {field}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
        /// Name of the mismatched input.
        field: String,
    },

    /// Wrapped error from the calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
