//! Error types for tethys-io.

use std::path::PathBuf;

use tethys_climatology::ClimatologyError;
use tethys_morph::MorphError;
use tethys_solar::SolarError;

/// Error type for all fallible operations in the tethys-io crate.
///
/// Covers file access, JSON encoding and decoding, and documents whose
/// contents do not describe a valid record or model series.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a file cannot be opened, created or written.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a document is not valid JSON for its schema.
    #[error("json error in {}: {reason}", path.display())]
    Json {
        /// Path of the document.
        path: PathBuf,
        /// Description of the decoding or encoding failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Wrapped error from the morph crate.
    #[error(transparent)]
    Morph(#[from] MorphError),

    /// Wrapped error from the climatology crate.
    #[error(transparent)]
    Climatology(#[from] ClimatologyError),

    /// Wrapped error from the solar crate.
    #[error(transparent)]
    Solar(#[from] SolarError),
}
