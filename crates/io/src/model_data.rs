//! Climate-model data documents.
//!
//! Monthly model output is grouped by experiment (`historical` or a
//! pathway id such as `ssp245`), then by variable, then by model:
//!
//! ```json
//! {
//!   "historical": { "tas": { "MODEL-A": { "start_year": 1950, "values": [ ... ] } } },
//!   "ssp245":     { "tas": { "MODEL-A": { "start_year": 2015, "values": [ ... ] } } }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tethys_climatology::ModelSeries;
use tracing::{debug, warn};

use crate::error::IoError;
use crate::json::read_json;
use crate::validate::{ValidationCollector, check_whole_years};

/// Experiment id of the historical runs.
pub const HISTORICAL: &str = "historical";

/// A model's monthly series as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDoc {
    /// Year of the first January.
    pub start_year: i32,
    /// Monthly values, January first.
    pub values: Vec<f64>,
}

/// On-disk form of [`ModelData`]: experiment → variable → model → series.
pub type ModelDataDoc = BTreeMap<String, BTreeMap<String, BTreeMap<String, SeriesDoc>>>;

/// Historical and scenario members of one model variable, paired by model.
#[derive(Debug, Clone)]
pub struct PairedMembers {
    /// Models present in both experiments, sorted.
    pub models: Vec<String>,
    /// Historical series, one per model.
    pub historical: Vec<ModelSeries>,
    /// Scenario series, one per model.
    pub scenario: Vec<ModelSeries>,
}

/// Monthly model output for every experiment, variable and model.
#[derive(Debug, Clone, Default)]
pub struct ModelData {
    series: BTreeMap<String, BTreeMap<String, BTreeMap<String, ModelSeries>>>,
}

impl ModelData {
    /// Converts a document, validating every series.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every series that is empty
    /// or does not hold whole years.
    pub fn from_doc(doc: ModelDataDoc) -> Result<Self, IoError> {
        let mut c = ValidationCollector::new();
        for (experiment, variables) in &doc {
            for (variable, models) in variables {
                for (model, s) in models {
                    check_whole_years(&mut c, &format!("{experiment}/{variable}/{model}"), &s.values);
                }
            }
        }
        c.finish()?;

        let mut series = BTreeMap::new();
        for (experiment, variables) in doc {
            let mut by_variable = BTreeMap::new();
            for (variable, models) in variables {
                let mut by_model = BTreeMap::new();
                for (model, s) in models {
                    by_model.insert(model, ModelSeries::new(s.start_year, s.values)?);
                }
                by_variable.insert(variable, by_model);
            }
            series.insert(experiment, by_variable);
        }
        Ok(Self { series })
    }

    /// Adds one model's series.
    pub fn insert(&mut self, experiment: &str, variable: &str, model: &str, series: ModelSeries) {
        self.series
            .entry(experiment.to_string())
            .or_default()
            .entry(variable.to_string())
            .or_default()
            .insert(model.to_string(), series);
    }

    /// Experiment ids, sorted.
    pub fn experiments(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Variables available for an experiment, sorted.
    pub fn variables(&self, experiment: &str) -> impl Iterator<Item = &str> {
        self.series
            .get(experiment)
            .into_iter()
            .flat_map(|v| v.keys().map(String::as_str))
    }

    /// Series of every model for an experiment and variable, by model name.
    pub fn members(&self, experiment: &str, variable: &str) -> Option<&BTreeMap<String, ModelSeries>> {
        self.series.get(experiment)?.get(variable)
    }

    /// Historical and `scenario` series of `variable` for the models that
    /// ran both. Returns `None` when no model did.
    pub fn paired(&self, scenario: &str, variable: &str) -> Option<PairedMembers> {
        let hist = self.members(HISTORICAL, variable)?;
        let scen = self.members(scenario, variable)?;
        let mut paired = PairedMembers {
            models: Vec::new(),
            historical: Vec::new(),
            scenario: Vec::new(),
        };
        for (model, h) in hist {
            match scen.get(model) {
                Some(s) => {
                    paired.models.push(model.clone());
                    paired.historical.push(h.clone());
                    paired.scenario.push(s.clone());
                }
                None => debug!(model = %model, scenario, variable, "model has no scenario run"),
            }
        }
        if paired.models.is_empty() {
            warn!(scenario, variable, "no model has both historical and scenario runs");
            return None;
        }
        Some(paired)
    }
}

/// Reads a model data document.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`], [`IoError::Json`] or
/// [`IoError::Validation`].
pub fn read_model_data(path: &Path) -> Result<ModelData, IoError> {
    let doc: ModelDataDoc = read_json(path)?;
    let data = ModelData::from_doc(doc)?;
    debug!(path = %path.display(), experiments = data.series.len(), "read model data");
    Ok(data)
}
