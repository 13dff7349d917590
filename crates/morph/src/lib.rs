//! Future-climate morphing of 8760-hour weather records.
//!
//! A present-day record is shifted and stretched month by month with the
//! change between a baseline and a future model climatology. Quantities
//! that depend on morphed variables are recomputed so the record stays
//! physically consistent.
//!
//! # Tasks
//!
//! | Group | Task | Fields |
//! |-------|------|--------|
//! | Temperature | shift-stretch by Δtas and diurnal-range scale | `drybulb_C` |
//! | Humidity | stretch by relative Δhuss, clip to [1, 100] | `relhum_percent` |
//! | Pressure | shift by Δpsl | `atmos_Pa` |
//! | Dew Point | Magnus from morphed dry bulb and humidity | `dewpoint_C` |
//! | Wind | stretch by relative Δ`hypot(uas, vas)` | `windspd_ms` |
//! | Clouds and Radiation | stretch by `1 + Δrsds / mean` | `glohorrad_Whm2` |
//! | | logistic diffuse model and DIRINT | `difhorrad_Whm2`, `dirnorrad_Whm2` |
//! | | shift by `trunc(Δclt / 10)` | `totskycvr_tenths` |
//! | | present opaque ratio | `opaqskycvr_tenths` |
//!
//! Tasks run in dependency order through [`morph_record`]. A failed task
//! only fails the tasks that depend on it.

mod config;
mod error;
mod graph;
mod humidity;
mod pressure;
mod radiation;
mod record;
mod result;
mod sky_cover;
mod temperature;
mod transform;
mod variable;
mod wind;

pub use config::MorphConfig;
pub use error::MorphError;
pub use graph::{MorphTask, plan, tasks_for};
pub use humidity::{RELATIVE_HUMIDITY_RANGE, dew_point, dew_point_series, morph_relative_humidity};
pub use pressure::morph_pressure;
pub use radiation::{decompose_radiation, global_horizontal_factors, morph_global_horizontal};
pub use record::WeatherRecord;
pub use result::{MorphOutput, VariableFailure};
pub use sky_cover::{
    SKY_COVER_RANGE, morph_opaque_sky_cover, morph_total_sky_cover, sky_cover_shift,
};
pub use temperature::{morph_dry_bulb, temperature_scale};
pub use transform::{
    OUTPUT_DECIMALS, shift, shift_series, shift_stretch, shift_stretch_series, stretch,
    stretch_series,
};
pub use variable::{Field, ModelVariable, VariableGroup};
pub use wind::{morph_wind_speed, wind_speed};

use std::collections::{BTreeMap, BTreeSet};

use tethys_climatology::{ClimatologyPair, ClimatologySet};
use tracing::{debug, warn};

/// Looks up the climatology pair a task needs.
fn model_pair<'a>(
    climatologies: &'a ClimatologySet,
    task: MorphTask,
    variable: ModelVariable,
) -> Result<&'a ClimatologyPair, MorphError> {
    climatologies
        .get(variable.id())
        .ok_or_else(|| MorphError::MissingDependency {
            variable: task.name().to_string(),
            model_variable: variable.id().to_string(),
        })
}

/// Looks up a field produced by an earlier task.
fn produced(computed: &BTreeMap<Field, Vec<f64>>, field: Field) -> Result<&[f64], MorphError> {
    computed
        .get(&field)
        .map(Vec::as_slice)
        .ok_or_else(|| MorphError::MissingField {
            field: field.key().to_string(),
        })
}

/// Runs one task against the record and the outputs of earlier tasks.
fn run_task(
    task: MorphTask,
    record: &WeatherRecord,
    climatologies: &ClimatologySet,
    config: &MorphConfig,
    computed: &BTreeMap<Field, Vec<f64>>,
) -> Result<Vec<(Field, Vec<f64>)>, MorphError> {
    let pair = |v| model_pair(climatologies, task, v);
    let out = match task {
        MorphTask::Temperature => {
            let (tas, tasmax, tasmin) = (
                pair(ModelVariable::Tas)?,
                pair(ModelVariable::Tasmax)?,
                pair(ModelVariable::Tasmin)?,
            );
            let present = record.require(Field::DryBulb)?;
            vec![(Field::DryBulb, morph_dry_bulb(present, tas, tasmax, tasmin)?)]
        }
        MorphTask::Humidity => {
            let huss = pair(ModelVariable::Huss)?;
            let present = record.require(Field::RelativeHumidity)?;
            vec![(Field::RelativeHumidity, morph_relative_humidity(present, huss)?)]
        }
        MorphTask::Pressure => {
            let psl = pair(ModelVariable::Psl)?;
            let present = record.require(Field::AtmosphericPressure)?;
            vec![(Field::AtmosphericPressure, morph_pressure(present, psl)?)]
        }
        MorphTask::Wind => {
            let (uas, vas) = (pair(ModelVariable::Uas)?, pair(ModelVariable::Vas)?);
            let present = record.require(Field::WindSpeed)?;
            vec![(Field::WindSpeed, morph_wind_speed(present, uas, vas)?)]
        }
        MorphTask::GlobalHorizontal => {
            let rsds = pair(ModelVariable::Rsds)?;
            let present = record.require(Field::GlobalHorizontal)?;
            vec![(Field::GlobalHorizontal, morph_global_horizontal(present, rsds)?)]
        }
        MorphTask::TotalSkyCover => {
            let clt = pair(ModelVariable::Clt)?;
            let present = record.require(Field::TotalSkyCover)?;
            vec![(Field::TotalSkyCover, morph_total_sky_cover(present, clt)?)]
        }
        MorphTask::DewPoint => {
            let dry_bulb = produced(computed, Field::DryBulb)?;
            let humidity = produced(computed, Field::RelativeHumidity)?;
            vec![(Field::DewPoint, dew_point_series(dry_bulb, humidity)?)]
        }
        MorphTask::Decomposition => {
            let glohor = produced(computed, Field::GlobalHorizontal)?;
            let exthor = if config.compute_exthor() {
                record.field(Field::ExtraterrestrialHorizontal)
            } else {
                Some(record.require(Field::ExtraterrestrialHorizontal)?)
            };
            let (diffuse, direct) = decompose_radiation(glohor, exthor, record.location())?;
            vec![(Field::DiffuseHorizontal, diffuse), (Field::DirectNormal, direct)]
        }
        MorphTask::OpaqueSkyCover => {
            let total = produced(computed, Field::TotalSkyCover)?;
            let present_opaque = record.require(Field::OpaqueSkyCover)?;
            let present_total = record.require(Field::TotalSkyCover)?;
            vec![(
                Field::OpaqueSkyCover,
                morph_opaque_sky_cover(total, present_opaque, present_total)?,
            )]
        }
    };
    Ok(out)
}

/// Error for a task whose dependency `upstream` failed with `cause`.
fn upstream_error(task: MorphTask, upstream: MorphTask, cause: &MorphError) -> MorphError {
    match cause {
        MorphError::MissingDependency { model_variable, .. } => MorphError::MissingDependency {
            variable: task.name().to_string(),
            model_variable: model_variable.clone(),
        },
        _ => MorphError::UpstreamFailed {
            variable: task.name().to_string(),
            upstream: upstream.name().to_string(),
        },
    }
}

/// Morphs a weather record with one set of climatologies.
///
/// Every task needed by the requested groups runs once, after the tasks it
/// depends on. Only fields of tasks in requested groups are emitted, so
/// requesting Dew Point alone leaves dry bulb and humidity untouched.
///
/// A task that fails is recorded in [`MorphOutput::failures`] and its
/// dependants fail with it; independent tasks still run.
///
/// # Errors
///
/// Returns [`MorphError::InvalidConfig`] if `config` requests nothing.
#[tracing::instrument(skip(record, climatologies, config), fields(pathway = climatologies.pathway(), percentile = climatologies.percentile()))]
pub fn morph_record(
    record: &WeatherRecord,
    climatologies: &ClimatologySet,
    config: &MorphConfig,
) -> Result<MorphOutput, MorphError> {
    config.validate()?;
    let requested: &BTreeSet<VariableGroup> = config.variables();
    let order = plan(requested);

    let mut computed: BTreeMap<Field, Vec<f64>> = BTreeMap::new();
    let mut failed: BTreeMap<MorphTask, MorphError> = BTreeMap::new();
    let mut tasks_run = Vec::new();

    for task in order {
        let upstream = task
            .dependencies()
            .iter()
            .find_map(|dep| failed.get(dep).map(|e| upstream_error(task, *dep, e)));
        let result = match upstream {
            Some(err) => Err(err),
            None => run_task(task, record, climatologies, config, &computed),
        };
        match result {
            Ok(fields) => {
                debug!(task = task.name(), "applied");
                computed.extend(fields);
                tasks_run.push(task);
            }
            Err(err) => {
                warn!(task = task.name(), error = %err, "morph task failed");
                failed.insert(task, err);
            }
        }
    }

    let mut failures = Vec::new();
    let mut fields = BTreeMap::new();
    for &group in requested {
        for &task in tasks_for(group) {
            if let Some(err) = failed.remove(&task) {
                failures.push(VariableFailure {
                    variable: group,
                    task,
                    error: err,
                });
                continue;
            }
            for field in task.fields() {
                if let Some(values) = computed.remove(field) {
                    fields.insert(*field, values);
                }
            }
        }
    }

    Ok(MorphOutput::new(
        climatologies.pathway(),
        climatologies.percentile(),
        fields,
        failures,
        tasks_run,
    ))
}
