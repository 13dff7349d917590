//! Pure conversion functions: TOML config structs -> crate API types.

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};

use tethys_climatology::YearRange;
use tethys_morph::{ModelVariable, MorphConfig, VariableGroup};

use crate::config::MorphToml;

/// Scenario names and the SSP pathway each selects.
const SCENARIOS: [(&str, &str); 4] = [
    ("Best Case Scenario", "ssp126"),
    ("Middle of the Road", "ssp245"),
    ("Upper Middle Scenario", "ssp370"),
    ("Worst Case Scenario", "ssp585"),
];

/// Parses a scenario name or raw SSP id into the pathway id.
pub fn parse_pathway(s: &str) -> Result<String> {
    let trimmed = s.trim();
    if let Some((_, id)) = SCENARIOS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
    {
        return Ok(id.to_string());
    }
    let lower = trimmed.to_lowercase();
    if SCENARIOS.iter().any(|(_, id)| *id == lower) {
        return Ok(lower);
    }
    bail!("unknown pathway: {s:?}")
}

/// Parses and de-duplicates pathways, keeping first-seen order.
pub fn parse_pathways(names: &[String]) -> Result<Vec<String>> {
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let id = parse_pathway(name)?;
        if !out.contains(&id) {
            out.push(id);
        }
    }
    if out.is_empty() {
        bail!("no pathways configured");
    }
    Ok(out)
}

/// Parses variable group names.
pub fn parse_variables(names: &[String]) -> Result<BTreeSet<VariableGroup>> {
    names
        .iter()
        .map(|n| n.parse::<VariableGroup>().map_err(anyhow::Error::from))
        .collect()
}

/// Model variables needed by the requested groups.
pub fn model_variables(groups: &BTreeSet<VariableGroup>) -> BTreeSet<ModelVariable> {
    groups
        .iter()
        .flat_map(|g| g.model_variables().iter().copied())
        .collect()
}

/// Checks that every percentile lies within 0..=100.
pub fn parse_percentiles(percentiles: &[u8]) -> Result<Vec<u8>> {
    if percentiles.is_empty() {
        bail!("no percentiles configured");
    }
    if let Some(p) = percentiles.iter().find(|&&p| p > 100) {
        bail!("percentile {p} is outside 0..=100");
    }
    let mut out = percentiles.to_vec();
    out.sort_unstable();
    out.dedup();
    Ok(out)
}

/// Baseline years: the configured override, or the record's own range.
pub fn resolve_baseline(morph: &MorphToml, record_range: YearRange) -> Result<YearRange> {
    match morph.baseline_range {
        Some([start, end]) => YearRange::new(start, end)
            .with_context(|| format!("invalid baseline_range [{start}, {end}]")),
        None => Ok(record_range),
    }
}

/// Builds a [`MorphConfig`] from the TOML morph configuration.
pub fn build_morph_config(morph: &MorphToml) -> Result<MorphConfig> {
    let groups = parse_variables(&morph.variables)?;
    let cfg = MorphConfig::new()
        .with_variables(groups)
        .with_compute_exthor(morph.compute_exthor);
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pathway_names_and_ids() {
        assert_eq!(parse_pathway("Best Case Scenario").unwrap(), "ssp126");
        assert_eq!(parse_pathway("middle of the road").unwrap(), "ssp245");
        assert_eq!(parse_pathway("SSP370").unwrap(), "ssp370");
        assert_eq!(parse_pathway(" Worst Case Scenario ").unwrap(), "ssp585");
        assert!(parse_pathway("ssp119").is_err());
    }

    #[test]
    fn pathways_dedup() {
        let names = vec!["ssp245".to_string(), "Middle of the Road".to_string()];
        assert_eq!(parse_pathways(&names).unwrap(), vec!["ssp245".to_string()]);
        assert!(parse_pathways(&[]).is_err());
    }

    #[test]
    fn dew_point_needs_temperature_and_humidity_models() {
        let groups = parse_variables(&["Dew Point".to_string()]).unwrap();
        let vars: Vec<&str> = model_variables(&groups).iter().map(|v| v.id()).collect();
        assert_eq!(vars, vec!["tas", "tasmax", "tasmin", "huss"]);
    }

    #[test]
    fn unknown_variable_is_error() {
        assert!(parse_variables(&["Precipitation".to_string()]).is_err());
    }

    #[test]
    fn percentiles_checked() {
        assert_eq!(parse_percentiles(&[90, 10, 50, 10]).unwrap(), vec![10, 50, 90]);
        assert!(parse_percentiles(&[101]).is_err());
        assert!(parse_percentiles(&[]).is_err());
    }

    #[test]
    fn baseline_override() {
        let record = YearRange::new(1990, 2019).unwrap();
        let mut morph = MorphToml::default();
        assert_eq!(resolve_baseline(&morph, record).unwrap(), record);
        morph.baseline_range = Some([1985, 2014]);
        assert_eq!(resolve_baseline(&morph, record).unwrap().start(), 1985);
        morph.baseline_range = Some([2014, 1985]);
        assert!(resolve_baseline(&morph, record).is_err());
    }

    #[test]
    fn default_morph_config_requests_everything() {
        let cfg = build_morph_config(&MorphToml::default()).unwrap();
        assert_eq!(cfg.variables().len(), 6);
        let mut empty = MorphToml::default();
        empty.variables.clear();
        assert!(build_morph_config(&empty).is_err());
    }

    #[test]
    fn toml_defaults() {
        let cfg: crate::config::TethysConfig = toml::from_str(
            r#"
            [io]
            record = "present.json"
            model_data = "models.json"

            [morph]
            pathways = ["Worst Case Scenario"]
            percentiles = [10, 90]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.project_name, "tethys");
        assert_eq!(cfg.morph.future_years, vec![2050]);
        assert_eq!(cfg.morph.store_capacity, 512);
        assert_eq!(cfg.io.output_directory, std::path::PathBuf::from("morphed"));
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        let res: Result<crate::config::TethysConfig, _> = toml::from_str(
            r#"
            [io]
            record = "a.json"
            model_data = "b.json"
            epw = "c.epw"
            "#,
        );
        assert!(res.is_err());
    }
}
