//! Percentile series across a multi-model ensemble.

use crate::error::ClimatologyError;
use crate::model::ModelSeries;

/// Builds the `percentile` (0..=100) series of an ensemble.
///
/// Each timestep takes the type-7 quantile of the members' finite values;
/// a timestep where no member is finite is NaN. All members must share
/// their start year and length.
///
/// # Errors
///
/// Returns [`ClimatologyError::EmptyEnsemble`] for no members,
/// [`ClimatologyError::InvalidPercentile`] outside 0..=100 and
/// [`ClimatologyError::LengthMismatch`] for misaligned members.
pub fn ensemble_percentile(
    members: &[ModelSeries],
    percentile: f64,
) -> Result<ModelSeries, ClimatologyError> {
    let Some(first) = members.first() else {
        return Err(ClimatologyError::EmptyEnsemble);
    };
    if !(0.0..=100.0).contains(&percentile) {
        return Err(ClimatologyError::InvalidPercentile { percentile });
    }
    for (i, member) in members.iter().enumerate().skip(1) {
        if member.start_year() != first.start_year() || member.values().len() != first.values().len()
        {
            return Err(ClimatologyError::LengthMismatch {
                expected: first.values().len(),
                got: member.values().len(),
                field: format!("ensemble member {i}"),
            });
        }
    }

    let p = percentile / 100.0;
    let mut column = Vec::with_capacity(members.len());
    let values = (0..first.values().len())
        .map(|t| {
            column.clear();
            column.extend(
                members
                    .iter()
                    .map(|m| m.values()[t])
                    .filter(|v| v.is_finite()),
            );
            if column.is_empty() {
                return f64::NAN;
            }
            column.sort_by(f64::total_cmp);
            tethys_stats::quantile_type7(&column, p)
        })
        .collect();

    ModelSeries::new(first.start_year(), values)
}
