use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Tethys run configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TethysConfig {
    /// Prefix of every output file.
    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// I/O settings.
    pub io: IoToml,

    /// Morph settings.
    #[serde(default)]
    pub morph: MorphToml,
}

fn default_project_name() -> String {
    "tethys".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Present-day weather record document.
    pub record: PathBuf,
    /// Climate-model data document.
    pub model_data: PathBuf,
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("morphed")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MorphToml {
    #[serde(default = "default_variables")]
    pub variables: Vec<String>,
    #[serde(default = "default_pathways")]
    pub pathways: Vec<String>,
    #[serde(default = "default_percentiles")]
    pub percentiles: Vec<u8>,
    #[serde(default = "default_future_years")]
    pub future_years: Vec<i32>,
    /// Overrides the record's own baseline years.
    #[serde(default)]
    pub baseline_range: Option<[i32; 2]>,
    /// Restricts the ensemble to these models; empty uses every model.
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default = "default_store_capacity")]
    pub store_capacity: usize,
    #[serde(default = "default_true")]
    pub compute_exthor: bool,
}

impl Default for MorphToml {
    fn default() -> Self {
        Self {
            variables: default_variables(),
            pathways: default_pathways(),
            percentiles: default_percentiles(),
            future_years: default_future_years(),
            baseline_range: None,
            models: Vec::new(),
            store_capacity: default_store_capacity(),
            compute_exthor: true,
        }
    }
}

fn default_variables() -> Vec<String> {
    [
        "Temperature",
        "Humidity",
        "Pressure",
        "Dew Point",
        "Wind",
        "Clouds and Radiation",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_pathways() -> Vec<String> {
    vec!["Middle of the Road".to_string()]
}
fn default_percentiles() -> Vec<u8> {
    vec![50]
}
fn default_future_years() -> Vec<i32> {
    vec![2050]
}
fn default_store_capacity() -> usize {
    512
}
fn default_true() -> bool {
    true
}
