//! Result types of a morph run.

use std::collections::BTreeMap;

use crate::error::MorphError;
use crate::graph::MorphTask;
use crate::record::WeatherRecord;
use crate::variable::{Field, VariableGroup};

/// A requested variable that could not be morphed.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableFailure {
    /// Requested group the failed task belongs to.
    pub variable: VariableGroup,
    /// Task that failed.
    pub task: MorphTask,
    /// Why it failed.
    pub error: MorphError,
}

/// Morphed fields of one (pathway, percentile) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphOutput {
    pathway: String,
    percentile: u8,
    fields: BTreeMap<Field, Vec<f64>>,
    failures: Vec<VariableFailure>,
    tasks_run: Vec<MorphTask>,
}

impl MorphOutput {
    /// Creates a new output.
    pub fn new(
        pathway: impl Into<String>,
        percentile: u8,
        fields: BTreeMap<Field, Vec<f64>>,
        failures: Vec<VariableFailure>,
        tasks_run: Vec<MorphTask>,
    ) -> Self {
        Self {
            pathway: pathway.into(),
            percentile,
            fields,
            failures,
            tasks_run,
        }
    }

    /// Pathway the climatologies came from.
    pub fn pathway(&self) -> &str {
        &self.pathway
    }

    /// Ensemble percentile of the climatologies.
    pub fn percentile(&self) -> u8 {
        self.percentile
    }

    /// Returns a morphed field, if it was emitted.
    pub fn field(&self, field: Field) -> Option<&[f64]> {
        self.fields.get(&field).map(Vec::as_slice)
    }

    /// Iterates emitted fields in [`Field`] order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &[f64])> {
        self.fields.iter().map(|(&f, v)| (f, v.as_slice()))
    }

    /// Requested variables that failed.
    pub fn failures(&self) -> &[VariableFailure] {
        &self.failures
    }

    /// Tasks that ran successfully, in evaluation order.
    pub fn tasks_run(&self) -> &[MorphTask] {
        &self.tasks_run
    }

    /// Returns `true` when no requested variable failed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Consumes self and returns the emitted fields.
    pub fn into_fields(self) -> BTreeMap<Field, Vec<f64>> {
        self.fields
    }

    /// Returns a copy of `record` with the emitted fields replaced.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::LengthMismatch`] if an emitted field does not
    /// cover the year.
    pub fn apply_to(&self, record: &WeatherRecord) -> Result<WeatherRecord, MorphError> {
        let mut out = record.clone();
        for (&field, values) in &self.fields {
            out.insert(field, values.clone())?;
        }
        Ok(out)
    }
}
