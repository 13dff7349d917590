//! Configuration for a morph run.

use std::collections::BTreeSet;

use crate::error::MorphError;
use crate::variable::VariableGroup;

/// Which variable groups to morph and how.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphConfig {
    /// Requested variable groups.
    variables: BTreeSet<VariableGroup>,
    /// Compute extraterrestrial horizontal radiation when the record lacks it.
    compute_exthor: bool,
}

impl MorphConfig {
    /// Creates a configuration with no variables requested.
    pub fn new() -> Self {
        Self {
            variables: BTreeSet::new(),
            compute_exthor: true,
        }
    }

    /// Creates a configuration requesting every variable group.
    pub fn all() -> Self {
        Self::new().with_variables(VariableGroup::ALL)
    }

    /// Requests one more variable group.
    pub fn with_variable(mut self, group: VariableGroup) -> Self {
        self.variables.insert(group);
        self
    }

    /// Requests several variable groups.
    pub fn with_variables(mut self, groups: impl IntoIterator<Item = VariableGroup>) -> Self {
        self.variables.extend(groups);
        self
    }

    /// Sets whether a missing `exthorrad_Whm2` field is computed from the
    /// site geometry (default `true`). When `false` the record must carry it.
    pub fn with_compute_exthor(mut self, compute: bool) -> Self {
        self.compute_exthor = compute;
        self
    }

    /// Returns the requested variable groups.
    pub fn variables(&self) -> &BTreeSet<VariableGroup> {
        &self.variables
    }

    /// Returns whether extraterrestrial radiation may be computed.
    pub fn compute_exthor(&self) -> bool {
        self.compute_exthor
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), MorphError> {
        if self.variables.is_empty() {
            return Err(MorphError::InvalidConfig {
                reason: "at least one variable group must be requested".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self::all()
    }
}
