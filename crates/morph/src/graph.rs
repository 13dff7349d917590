//! Morph tasks and their dependency graph.
//!
//! Each task produces one or more fields. A task may read the output of
//! tasks it depends on, so tasks are planned in dependency order and every
//! task in the plan runs once.

use std::collections::BTreeSet;
use std::fmt;

use crate::variable::{Field, ModelVariable, VariableGroup};

/// A unit of morphing work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MorphTask {
    /// Dry bulb.
    Temperature,
    /// Relative humidity.
    Humidity,
    /// Station pressure.
    Pressure,
    /// Wind speed.
    Wind,
    /// Global horizontal radiation.
    GlobalHorizontal,
    /// Total sky cover.
    TotalSkyCover,
    /// Dew point from morphed dry bulb and humidity.
    DewPoint,
    /// Diffuse horizontal and direct normal from morphed global radiation.
    Decomposition,
    /// Opaque sky cover from morphed total sky cover.
    OpaqueSkyCover,
}

impl MorphTask {
    /// Short name used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            MorphTask::Temperature => "temperature",
            MorphTask::Humidity => "humidity",
            MorphTask::Pressure => "pressure",
            MorphTask::Wind => "wind",
            MorphTask::GlobalHorizontal => "global horizontal radiation",
            MorphTask::TotalSkyCover => "total sky cover",
            MorphTask::DewPoint => "dew point",
            MorphTask::Decomposition => "radiation decomposition",
            MorphTask::OpaqueSkyCover => "opaque sky cover",
        }
    }

    /// Tasks whose output this task reads.
    pub fn dependencies(self) -> &'static [MorphTask] {
        match self {
            MorphTask::DewPoint => &[MorphTask::Temperature, MorphTask::Humidity],
            MorphTask::Decomposition => &[MorphTask::GlobalHorizontal],
            MorphTask::OpaqueSkyCover => &[MorphTask::TotalSkyCover],
            _ => &[],
        }
    }

    /// Variable group the task belongs to.
    pub fn group(self) -> VariableGroup {
        match self {
            MorphTask::Temperature => VariableGroup::Temperature,
            MorphTask::Humidity => VariableGroup::Humidity,
            MorphTask::Pressure => VariableGroup::Pressure,
            MorphTask::Wind => VariableGroup::Wind,
            MorphTask::DewPoint => VariableGroup::DewPoint,
            MorphTask::GlobalHorizontal
            | MorphTask::TotalSkyCover
            | MorphTask::Decomposition
            | MorphTask::OpaqueSkyCover => VariableGroup::CloudsAndRadiation,
        }
    }

    /// Fields the task writes.
    pub fn fields(self) -> &'static [Field] {
        match self {
            MorphTask::Temperature => &[Field::DryBulb],
            MorphTask::Humidity => &[Field::RelativeHumidity],
            MorphTask::Pressure => &[Field::AtmosphericPressure],
            MorphTask::Wind => &[Field::WindSpeed],
            MorphTask::GlobalHorizontal => &[Field::GlobalHorizontal],
            MorphTask::TotalSkyCover => &[Field::TotalSkyCover],
            MorphTask::DewPoint => &[Field::DewPoint],
            MorphTask::Decomposition => &[Field::DiffuseHorizontal, Field::DirectNormal],
            MorphTask::OpaqueSkyCover => &[Field::OpaqueSkyCover],
        }
    }

    /// Model variables the task reads directly.
    pub fn model_variables(self) -> &'static [ModelVariable] {
        use ModelVariable::*;
        match self {
            MorphTask::Temperature => &[Tas, Tasmax, Tasmin],
            MorphTask::Humidity => &[Huss],
            MorphTask::Pressure => &[Psl],
            MorphTask::Wind => &[Uas, Vas],
            MorphTask::GlobalHorizontal => &[Rsds],
            MorphTask::TotalSkyCover => &[Clt],
            MorphTask::DewPoint | MorphTask::Decomposition | MorphTask::OpaqueSkyCover => &[],
        }
    }
}

impl fmt::Display for MorphTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tasks whose fields a group emits.
pub fn tasks_for(group: VariableGroup) -> &'static [MorphTask] {
    match group {
        VariableGroup::Temperature => &[MorphTask::Temperature],
        VariableGroup::Humidity => &[MorphTask::Humidity],
        VariableGroup::Pressure => &[MorphTask::Pressure],
        VariableGroup::DewPoint => &[MorphTask::DewPoint],
        VariableGroup::Wind => &[MorphTask::Wind],
        VariableGroup::CloudsAndRadiation => &[
            MorphTask::GlobalHorizontal,
            MorphTask::Decomposition,
            MorphTask::TotalSkyCover,
            MorphTask::OpaqueSkyCover,
        ],
    }
}

/// Orders every task needed by `groups` so that each task follows its
/// dependencies. Each task appears once.
pub fn plan(groups: &BTreeSet<VariableGroup>) -> Vec<MorphTask> {
    fn visit(task: MorphTask, seen: &mut BTreeSet<MorphTask>, order: &mut Vec<MorphTask>) {
        if !seen.insert(task) {
            return;
        }
        for &dep in task.dependencies() {
            visit(dep, seen, order);
        }
        order.push(task);
    }

    let mut seen = BTreeSet::new();
    let mut order = Vec::new();
    for &group in groups {
        for &task in tasks_for(group) {
            visit(task, &mut seen, &mut order);
        }
    }
    order
}
