//! Morph command: morph a weather record for every configured pathway,
//! percentile and future year.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

use tethys_climatology::{
    ClimatologyStore, ModelSeries, StoreKey, YearRange, climatology_pair, ensemble_percentile,
    future_period,
};
use tethys_io::{
    ModelData, PairedMembers, read_model_data, read_weather_record, write_morph_output,
    write_weather_record,
};
use tethys_morph::{ModelVariable, MorphConfig, WeatherRecord, morph_record};

use crate::cli::MorphArgs;
use crate::config::TethysConfig;
use crate::convert;

/// Historical and scenario percentile series of one model variable.
type Ensembles = BTreeMap<(String, ModelVariable, u8), (ModelSeries, ModelSeries)>;

/// Settings shared by every combination of one run.
struct RunContext<'a> {
    project: &'a str,
    output_dir: &'a Path,
    record: &'a WeatherRecord,
    config: &'a MorphConfig,
    baseline: YearRange,
}

/// Run the morph pipeline.
pub fn run(args: MorphArgs) -> Result<()> {
    let _cmd = info_span!("morph").entered();

    // 1. Load config, CLI flags override file values
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config: {}", args.config.display()))?;
    let config: TethysConfig = toml::from_str(&toml_str).context("failed to parse config TOML")?;

    let output_dir: PathBuf = args
        .output
        .unwrap_or_else(|| config.io.output_directory.clone());
    let pathway_names = if args.pathways.is_empty() {
        config.morph.pathways.clone()
    } else {
        args.pathways
    };
    let pathways = convert::parse_pathways(&pathway_names)?;
    let percentiles = convert::parse_percentiles(&config.morph.percentiles)?;
    let morph_cfg = convert::build_morph_config(&config.morph)?;
    if config.morph.future_years.is_empty() {
        bail!("no future_years configured");
    }

    // 2. Read inputs
    info!(path = %config.io.record.display(), "reading weather record");
    let record = read_weather_record(&config.io.record)
        .with_context(|| format!("failed to read record: {}", config.io.record.display()))?;
    let baseline = convert::resolve_baseline(&config.morph, record.baseline_range())?;
    info!(path = %config.io.model_data.display(), "reading model data");
    let model_data = read_model_data(&config.io.model_data).with_context(|| {
        format!(
            "failed to read model data: {}",
            config.io.model_data.display()
        )
    })?;

    // 3. Ensemble percentiles, independent of the future window
    let variables = convert::model_variables(morph_cfg.variables());
    let ensembles = build_ensembles(
        &model_data,
        &pathways,
        &variables,
        &percentiles,
        &config.morph.models,
    );
    info!(n = ensembles.len(), "ensemble percentiles built");

    // 4. Climatologies and morphs per future year
    let ctx = RunContext {
        project: &config.project_name,
        output_dir: &output_dir,
        record: &record,
        config: &morph_cfg,
        baseline,
    };
    let combos: Vec<(&str, u8)> = pathways
        .iter()
        .flat_map(|p| percentiles.iter().map(move |&q| (p.as_str(), q)))
        .collect();
    let mut store = ClimatologyStore::new(config.morph.store_capacity)?;
    let mut incomplete = 0;
    for &year in &config.morph.future_years {
        let _year = info_span!("future_year", year).entered();
        let future = future_period(year, baseline);
        store.clear();
        fill_store(&mut store, &ensembles, baseline, future);

        let results: Vec<Result<bool>> = combos
            .par_iter()
            .map(|&(pathway, percentile)| morph_one(&ctx, &store, pathway, percentile, year, future))
            .collect();
        for r in results {
            if !r? {
                incomplete += 1;
            }
        }
    }

    let total = combos.len() * config.morph.future_years.len();
    if incomplete > 0 {
        warn!(incomplete, total, "some morphs are missing variables");
    }
    info!(total, dir = %output_dir.display(), "morphed records written");
    Ok(())
}

/// Keeps the members of the named models; an empty list keeps all.
fn select_models(paired: PairedMembers, models: &[String]) -> PairedMembers {
    if models.is_empty() {
        return paired;
    }
    let mut out = PairedMembers {
        models: Vec::new(),
        historical: Vec::new(),
        scenario: Vec::new(),
    };
    for ((model, h), s) in paired
        .models
        .into_iter()
        .zip(paired.historical)
        .zip(paired.scenario)
    {
        if models.contains(&model) {
            out.models.push(model);
            out.historical.push(h);
            out.scenario.push(s);
        }
    }
    out
}

/// Percentile series of every (pathway, variable, percentile) the model
/// data supports. Unsupported combinations are logged and left out, so the
/// morph reports the variable as missing.
fn build_ensembles(
    data: &ModelData,
    pathways: &[String],
    variables: &BTreeSet<ModelVariable>,
    percentiles: &[u8],
    models: &[String],
) -> Ensembles {
    let jobs: Vec<(&String, ModelVariable)> = pathways
        .iter()
        .flat_map(|p| variables.iter().map(move |&v| (p, v)))
        .collect();

    jobs.par_iter()
        .flat_map_iter(|&(pathway, variable)| {
            let members = data
                .paired(pathway, variable.id())
                .map(|p| select_models(p, models))
                .filter(|p| !p.models.is_empty());
            let Some(members) = members else {
                warn!(pathway = %pathway, variable = %variable, "no model data");
                return Vec::new();
            };
            debug!(pathway = %pathway, variable = %variable, n_models = members.models.len(), "ensemble");
            percentiles
                .iter()
                .filter_map(|&q| {
                    let hist = ensemble_percentile(&members.historical, f64::from(q));
                    let scen = ensemble_percentile(&members.scenario, f64::from(q));
                    match (hist, scen) {
                        (Ok(h), Ok(s)) => Some(((pathway.clone(), variable, q), (h, s))),
                        (Err(e), _) | (_, Err(e)) => {
                            warn!(pathway = %pathway, variable = %variable, percentile = q, error = %e, "ensemble failed");
                            None
                        }
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Stores the baseline/future climatology pair of every ensemble.
fn fill_store(
    store: &mut ClimatologyStore,
    ensembles: &Ensembles,
    baseline: YearRange,
    future: YearRange,
) {
    for ((pathway, variable, percentile), (hist, scen)) in ensembles {
        match climatology_pair(hist, scen, baseline, future) {
            Ok(pair) => {
                let key = StoreKey::new(pathway.as_str(), variable.id(), *percentile);
                if let Some(evicted) = store.insert(key, pair) {
                    warn!(
                        pathway = %evicted.pathway,
                        variable = %evicted.variable,
                        percentile = evicted.percentile,
                        capacity = store.capacity(),
                        "climatology evicted; raise store_capacity"
                    );
                }
            }
            Err(e) => warn!(
                pathway = %pathway,
                variable = %variable,
                percentile,
                future_start = future.start(),
                future_end = future.end(),
                error = %e,
                "climatology failed"
            ),
        }
    }
}

/// Morphs and writes one combination. Returns whether every requested
/// variable was morphed.
fn morph_one(
    ctx: &RunContext<'_>,
    store: &ClimatologyStore,
    pathway: &str,
    percentile: u8,
    year: i32,
    future: YearRange,
) -> Result<bool> {
    let set = store.set_for(pathway, percentile);
    let output = morph_record(ctx.record, &set, ctx.config)
        .with_context(|| format!("morph failed for {pathway} p{percentile} {year}"))?;
    for failure in output.failures() {
        warn!(
            pathway,
            percentile,
            year,
            variable = %failure.variable,
            error = %failure.error,
            "variable not morphed"
        );
    }

    let stem = format!("{}_{pathway}_{year}_p{percentile}", ctx.project);
    let record_path = ctx.output_dir.join(format!("{stem}.json"));
    let morphed = output.apply_to(ctx.record)?;
    write_weather_record(&record_path, &morphed)
        .with_context(|| format!("failed to write {}", record_path.display()))?;
    let output_path = ctx.output_dir.join(format!("{stem}.morph.json"));
    write_morph_output(&output_path, &output, ctx.baseline, future)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    info!(path = %record_path.display(), "written");
    Ok(output.is_complete())
}
