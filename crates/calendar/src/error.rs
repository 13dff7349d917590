//! Error types for the tethys-calendar crate.

/// Error type for all fallible operations in the tethys-calendar crate.
///
/// Covers out-of-range calendar values in the 365-day year and keyed
/// tables built from sequences of the wrong length.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a day-of-year value is outside the valid range 1..=365.
    #[error("invalid day of year: {doy} (must be 1..=365)")]
    InvalidDoy {
        /// The invalid day-of-year value that was provided.
        doy: u16,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when an hour-of-year index is outside 0..8760.
    #[error("invalid hour of year: {hour} (must be 0..8760)")]
    InvalidHour {
        /// The invalid hour index.
        hour: usize,
    },

    /// Returned when a month- or day-keyed table is built from a sequence
    /// of the wrong length.
    #[error("shape mismatch: expected {expected} values, got {got}")]
    Shape {
        /// Required number of values (12 or 365).
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },
}
