//! Morph output documents.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tethys_climatology::YearRange;
use tethys_morph::MorphOutput;

use crate::error::IoError;
use crate::json::{read_json, write_json};
use crate::record::YearRangeDoc;

/// A variable that could not be morphed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureDoc {
    /// Variable group display name.
    pub variable: String,
    /// Failed task.
    pub task: String,
    /// Error message.
    pub error: String,
}

/// On-disk form of a [`MorphOutput`] and the periods it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphOutputDoc {
    /// Pathway id, e.g. `ssp245`.
    pub pathway: String,
    /// Ensemble percentile.
    pub percentile: u8,
    /// Baseline years of the climatologies.
    pub baseline: YearRangeDoc,
    /// Future years of the climatologies.
    pub future: YearRangeDoc,
    /// Morphed hourly series keyed by field key.
    pub fields: BTreeMap<String, Vec<f64>>,
    /// Requested variables that failed.
    #[serde(default)]
    pub failures: Vec<FailureDoc>,
}

impl MorphOutputDoc {
    /// Builds the document of a morph run.
    pub fn new(output: &MorphOutput, baseline: YearRange, future: YearRange) -> Self {
        Self {
            pathway: output.pathway().to_string(),
            percentile: output.percentile(),
            baseline: baseline.into(),
            future: future.into(),
            fields: output
                .fields()
                .map(|(f, v)| (f.key().to_string(), v.to_vec()))
                .collect(),
            failures: output
                .failures()
                .iter()
                .map(|f| FailureDoc {
                    variable: f.variable.name().to_string(),
                    task: f.task.name().to_string(),
                    error: f.error.to_string(),
                })
                .collect(),
        }
    }
}

/// Writes a morph output document.
///
/// # Errors
///
/// Returns [`IoError::Io`] or [`IoError::Json`] on write failure.
pub fn write_morph_output(
    path: &Path,
    output: &MorphOutput,
    baseline: YearRange,
    future: YearRange,
) -> Result<(), IoError> {
    write_json(path, &MorphOutputDoc::new(output, baseline, future))
}

/// Reads a morph output document.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Json`].
pub fn read_morph_output(path: &Path) -> Result<MorphOutputDoc, IoError> {
    read_json(path)
}
