//! Error types for the tethys-morph crate.

use tethys_calendar::CalendarError;
use tethys_climatology::ClimatologyError;
use tethys_solar::SolarError;

/// Error type for all fallible operations in the tethys-morph crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MorphError {
    /// Returned when a model climatology needed by a variable is absent.
    #[error("{variable} needs model variable {model_variable}, which is not available")]
    MissingDependency {
        /// Variable (or procedure) that could not be morphed.
        variable: String,
        /// Missing model variable id.
        model_variable: String,
    },

    /// Returned when the present-day record lacks a required field.
    #[error("weather record has no field {field}")]
    MissingField {
        /// Field key, e.g. `drybulb_C`.
        field: String,
    },

    /// Returned when a procedure cannot run because one it depends on failed
    /// for a reason other than a missing model variable.
    #[error("{variable} skipped because {upstream} failed")]
    UpstreamFailed {
        /// Procedure that was skipped.
        variable: String,
        /// Procedure that failed first.
        upstream: String,
    },

    /// Returned when an hourly series has the wrong length.
    #[error("length mismatch: expected {expected}, got {got} for {field}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
        /// Name of the mismatched series.
        field: String,
    },

    /// Returned when a variable group or field name is not recognised.
    #[error("unknown {kind}: {name}")]
    UnknownName {
        /// What was being parsed (`variable`, `field`).
        kind: String,
        /// The unrecognised name.
        name: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped error from the climatology crate.
    #[error(transparent)]
    Climatology(#[from] ClimatologyError),

    /// Wrapped error from the solar crate.
    #[error(transparent)]
    Solar(#[from] SolarError),

    /// Wrapped error from the calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
