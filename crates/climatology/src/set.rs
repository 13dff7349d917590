//! Baseline/future climatology pairs, grouped per pathway and percentile.

use std::collections::BTreeMap;

use crate::deltas::{monthly_absolute_delta, monthly_relative_delta};
use crate::error::ClimatologyError;
use tethys_calendar::MonthKeyed;

/// Historical-baseline and future-window climatologies of one model variable.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimatologyPair {
    baseline: MonthKeyed,
    future: MonthKeyed,
}

impl ClimatologyPair {
    /// Creates a new pair.
    pub fn new(baseline: MonthKeyed, future: MonthKeyed) -> Self {
        Self { baseline, future }
    }

    /// Returns the baseline climatology.
    pub fn baseline(&self) -> &MonthKeyed {
        &self.baseline
    }

    /// Returns the future climatology.
    pub fn future(&self) -> &MonthKeyed {
        &self.future
    }

    /// Monthly `future - baseline`.
    pub fn absolute_delta(&self) -> MonthKeyed {
        monthly_absolute_delta(&self.future, &self.baseline)
    }

    /// Monthly `future / baseline`.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::ZeroBaseline`] if any baseline month is zero.
    pub fn relative_delta(&self) -> Result<MonthKeyed, ClimatologyError> {
        monthly_relative_delta(&self.future, &self.baseline)
    }
}

/// All climatology pairs available for one (pathway, percentile)
/// combination, keyed by model variable id (`tas`, `huss`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct ClimatologySet {
    pathway: String,
    percentile: u8,
    pairs: BTreeMap<String, ClimatologyPair>,
}

impl ClimatologySet {
    /// Creates an empty set.
    pub fn new(pathway: impl Into<String>, percentile: u8) -> Self {
        Self {
            pathway: pathway.into(),
            percentile,
            pairs: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the pair for `variable`.
    pub fn with_pair(mut self, variable: impl Into<String>, pair: ClimatologyPair) -> Self {
        self.insert(variable, pair);
        self
    }

    /// Adds (or replaces) the pair for `variable`.
    pub fn insert(&mut self, variable: impl Into<String>, pair: ClimatologyPair) {
        self.pairs.insert(variable.into(), pair);
    }

    /// Returns the pathway identifier.
    pub fn pathway(&self) -> &str {
        &self.pathway
    }

    /// Returns the ensemble percentile.
    pub fn percentile(&self) -> u8 {
        self.percentile
    }

    /// Returns the pair for `variable`, if present.
    pub fn get(&self, variable: &str) -> Option<&ClimatologyPair> {
        self.pairs.get(variable)
    }

    /// Model variables present, in sorted order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }

    /// Number of variables present.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
