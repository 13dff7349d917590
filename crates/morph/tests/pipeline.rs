//! Whole-record morphing through the task graph.

use approx::assert_relative_eq;
use tethys_calendar::{HOURS_PER_YEAR, MonthKeyed, month_index};
use tethys_climatology::{ClimatologyPair, ClimatologySet, YearRange};
use tethys_morph::{
    Field, ModelVariable, MorphConfig, MorphError, MorphTask, VariableGroup, WeatherRecord,
    morph_record,
};
use tethys_solar::{Location, SolarGeometry, horizontal_extraterrestrial};

fn location() -> Location {
    Location::new(40.0, -105.0, -7.0).unwrap()
}

/// A present-day record with every field, all values at output precision.
fn record() -> WeatherRecord {
    let loc = location();
    let exthor = horizontal_extraterrestrial(&SolarGeometry::compute(&loc));
    let glohor: Vec<f64> = exthor.iter().map(|e| (e * 0.55).round()).collect();
    let hours = 0..HOURS_PER_YEAR;
    let dry_bulb: Vec<f64> = hours
        .clone()
        .map(|i| {
            let h = (i % 24) as f64;
            let season = ((i / 24) as f64 / 365.0 * std::f64::consts::TAU).cos();
            ((10.0 - 8.0 * season + 5.0 * ((h - 9.0) / 24.0 * std::f64::consts::TAU).sin())
                * 100.0)
                .round()
                / 100.0
        })
        .collect();
    let rh: Vec<f64> = hours.clone().map(|i| 30.0 + (i % 60) as f64).collect();
    let total: Vec<f64> = hours.clone().map(|i| ((i / 24) % 11) as f64).collect();
    let opaque: Vec<f64> = total.iter().map(|t| (t / 2.0).floor()).collect();

    WeatherRecord::new(loc, YearRange::new(1985, 2014).unwrap())
        .with_field(Field::DryBulb, dry_bulb)
        .unwrap()
        .with_field(Field::RelativeHumidity, rh)
        .unwrap()
        .with_field(Field::AtmosphericPressure, vec![83_500.0; HOURS_PER_YEAR])
        .unwrap()
        .with_field(Field::WindSpeed, hours.clone().map(|i| (i % 9) as f64).collect())
        .unwrap()
        .with_field(Field::GlobalHorizontal, glohor)
        .unwrap()
        .with_field(Field::ExtraterrestrialHorizontal, exthor)
        .unwrap()
        .with_field(Field::TotalSkyCover, total)
        .unwrap()
        .with_field(Field::OpaqueSkyCover, opaque)
        .unwrap()
}

fn pair(base: f64, fut: f64) -> ClimatologyPair {
    ClimatologyPair::new(MonthKeyed::from_array([base; 12]), MonthKeyed::from_array([fut; 12]))
}

/// Climatologies with the given change applied to every model variable's
/// baseline; `None` leaves the variable out.
fn climatologies(change: impl Fn(ModelVariable) -> Option<(f64, f64)>) -> ClimatologySet {
    let mut set = ClimatologySet::new("ssp245", 50);
    for v in ModelVariable::ALL {
        if let Some((base, fut)) = change(v) {
            set.insert(v.id(), pair(base, fut));
        }
    }
    set
}

fn baseline(v: ModelVariable) -> f64 {
    match v {
        ModelVariable::Tas => 12.0,
        ModelVariable::Tasmax => 18.0,
        ModelVariable::Tasmin => 6.0,
        ModelVariable::Huss => 0.008,
        ModelVariable::Psl => 101_300.0,
        ModelVariable::Uas => 3.0,
        ModelVariable::Vas => 4.0,
        ModelVariable::Clt => 55.0,
        ModelVariable::Rsds => 190.0,
    }
}

fn unchanged() -> ClimatologySet {
    climatologies(|v| Some((baseline(v), baseline(v))))
}

// ---- 1. Zero deltas leave directly morphed fields unchanged ----

#[test]
fn zero_deltas_are_identity() {
    let rec = record();
    let out = morph_record(&rec, &unchanged(), &MorphConfig::all()).unwrap();
    assert!(out.is_complete(), "{:?}", out.failures());

    for field in [
        Field::DryBulb,
        Field::RelativeHumidity,
        Field::AtmosphericPressure,
        Field::WindSpeed,
        Field::GlobalHorizontal,
        Field::TotalSkyCover,
        Field::OpaqueSkyCover,
    ] {
        let morphed = out.field(field).unwrap();
        let present = rec.field(field).unwrap();
        for (m, p) in morphed.iter().zip(present) {
            assert_relative_eq!(*m, *p, epsilon = 1e-9);
        }
    }
    // Recomputed fields are emitted too.
    assert!(out.field(Field::DewPoint).is_some());
    assert!(out.field(Field::DiffuseHorizontal).is_some());
    assert!(out.field(Field::DirectNormal).is_some());
    assert!(out.field(Field::ExtraterrestrialHorizontal).is_none());
}

// ---- 2. Bounded fields stay in range under large changes ----

#[test]
fn bounded_fields_stay_in_range() {
    let set = climatologies(|v| {
        let b = baseline(v);
        Some(match v {
            ModelVariable::Huss => (b, b * 3.0),
            ModelVariable::Clt => (b, b + 45.0),
            _ => (b, b),
        })
    });
    let out = morph_record(&record(), &set, &MorphConfig::all()).unwrap();

    let rh = out.field(Field::RelativeHumidity).unwrap();
    assert!(rh.iter().all(|&v| (1.0..=100.0).contains(&v)));
    assert!(rh.iter().any(|&v| v == 100.0));

    let total = out.field(Field::TotalSkyCover).unwrap();
    assert!(total.iter().all(|&v| (0.0..=10.0).contains(&v) && v == v.trunc()));

    let opaque = out.field(Field::OpaqueSkyCover).unwrap();
    let present_total = record().field(Field::TotalSkyCover).unwrap().to_vec();
    for (o, pt) in opaque.iter().zip(&present_total) {
        if *pt == 0.0 {
            assert_eq!(*o, 0.0);
        }
    }
}

// ---- 3. Known factors ----

#[test]
fn wind_doubles_with_model_speed() {
    let set = climatologies(|v| match v {
        ModelVariable::Uas => Some((4.0, 8.0)),
        ModelVariable::Vas => Some((0.0, 0.0)),
        _ => None,
    });
    let config = MorphConfig::new().with_variable(VariableGroup::Wind);
    let rec = record()
        .with_field(Field::WindSpeed, vec![5.0; HOURS_PER_YEAR])
        .unwrap();
    let out = morph_record(&rec, &set, &config).unwrap();
    assert!(out.field(Field::WindSpeed).unwrap().iter().all(|&v| v == 10.0));
}

#[test]
fn january_glohor_factor() {
    // Daytime 400 Wh/m² for half of each January day gives a mean of 200.
    let glohor: Vec<f64> = month_index()
        .iter()
        .enumerate()
        .map(|(i, &m)| if m == 1 && i % 24 >= 6 && i % 24 < 18 { 400.0 } else { 0.0 })
        .collect();
    let rec = record().with_field(Field::GlobalHorizontal, glohor).unwrap();
    let set = climatologies(|v| match v {
        ModelVariable::Rsds => Some((100.0, 120.0)),
        ModelVariable::Clt => Some((50.0, 50.0)),
        _ => None,
    });
    let config = MorphConfig::new().with_variable(VariableGroup::CloudsAndRadiation);
    let out = morph_record(&rec, &set, &config).unwrap();
    let morphed = out.field(Field::GlobalHorizontal).unwrap();
    assert_relative_eq!(morphed[12], 440.0, epsilon = 1e-9);
    assert_eq!(morphed[24 * 40 + 12], 0.0);
}

// ---- 4. Requested groups decide what is emitted ----

#[test]
fn dew_point_alone_emits_only_dew_point() {
    let config = MorphConfig::new().with_variable(VariableGroup::DewPoint);
    let out = morph_record(&record(), &unchanged(), &config).unwrap();
    let emitted: Vec<Field> = out.fields().map(|(f, _)| f).collect();
    assert_eq!(emitted, vec![Field::DewPoint]);
    assert_eq!(
        out.tasks_run(),
        &[MorphTask::Temperature, MorphTask::Humidity, MorphTask::DewPoint]
    );
    let dp = out.field(Field::DewPoint).unwrap();
    let t = record().field(Field::DryBulb).unwrap().to_vec();
    for (d, t) in dp.iter().zip(&t) {
        assert!(*d <= *t + 0.01);
    }
}

#[test]
fn applying_output_keeps_unrequested_fields() {
    let rec = record();
    let set = climatologies(|v| Some((baseline(v), baseline(v) + 100.0)));
    let config = MorphConfig::new().with_variable(VariableGroup::Pressure);
    let out = morph_record(&rec, &set, &config).unwrap();
    let morphed = out.apply_to(&rec).unwrap();
    assert_eq!(morphed.field(Field::AtmosphericPressure).unwrap()[0], 83_600.0);
    assert_eq!(morphed.field(Field::DryBulb), rec.field(Field::DryBulb));
}

// ---- 5. Failures stay local ----

#[test]
fn missing_model_variable_fails_only_dependants() {
    let set = climatologies(|v| match v {
        ModelVariable::Tasmin => None,
        v => Some((baseline(v), baseline(v))),
    });
    let out = morph_record(&record(), &set, &MorphConfig::all()).unwrap();
    assert!(!out.is_complete());

    let failed: Vec<MorphTask> = out.failures().iter().map(|f| f.task).collect();
    assert_eq!(failed, vec![MorphTask::Temperature, MorphTask::DewPoint]);
    for failure in out.failures() {
        match &failure.error {
            MorphError::MissingDependency { model_variable, .. } => {
                assert_eq!(model_variable, "tasmin")
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
    assert!(out.field(Field::DryBulb).is_none());
    assert!(out.field(Field::DewPoint).is_none());
    assert!(out.field(Field::RelativeHumidity).is_some());
    assert!(out.field(Field::WindSpeed).is_some());
    assert!(out.field(Field::DirectNormal).is_some());
}

#[test]
fn missing_present_field_is_reported() {
    let loc = location();
    let rec = WeatherRecord::new(loc, YearRange::new(1985, 2014).unwrap())
        .with_field(Field::WindSpeed, vec![2.0; HOURS_PER_YEAR])
        .unwrap();
    let config = MorphConfig::new()
        .with_variable(VariableGroup::Wind)
        .with_variable(VariableGroup::Pressure);
    let out = morph_record(&rec, &unchanged(), &config).unwrap();
    assert_eq!(out.failures().len(), 1);
    assert_eq!(
        out.failures()[0].error,
        MorphError::MissingField {
            field: "atmos_Pa".to_string()
        }
    );
    assert!(out.field(Field::WindSpeed).is_some());
}

#[test]
fn dependant_of_failed_task_reports_upstream() {
    let rec = WeatherRecord::new(location(), YearRange::new(1985, 2014).unwrap())
        .with_field(Field::TotalSkyCover, vec![5.0; HOURS_PER_YEAR])
        .unwrap()
        .with_field(Field::OpaqueSkyCover, vec![2.0; HOURS_PER_YEAR])
        .unwrap();
    let config = MorphConfig::new().with_variable(VariableGroup::CloudsAndRadiation);
    let out = morph_record(&rec, &unchanged(), &config).unwrap();

    let failed: Vec<MorphTask> = out.failures().iter().map(|f| f.task).collect();
    assert_eq!(failed, vec![MorphTask::GlobalHorizontal, MorphTask::Decomposition]);
    assert!(matches!(out.failures()[0].error, MorphError::MissingField { .. }));
    assert_eq!(
        out.failures()[1].error,
        MorphError::UpstreamFailed {
            variable: "radiation decomposition".to_string(),
            upstream: "global horizontal radiation".to_string(),
        }
    );
    assert_eq!(out.field(Field::TotalSkyCover).unwrap()[0], 5.0);
    assert_eq!(out.field(Field::OpaqueSkyCover).unwrap()[0], 2.0);
}

#[test]
fn exthor_required_when_computing_disabled() {
    let rec = WeatherRecord::new(location(), YearRange::new(1985, 2014).unwrap())
        .with_field(Field::GlobalHorizontal, vec![0.0; HOURS_PER_YEAR])
        .unwrap()
        .with_field(Field::TotalSkyCover, vec![0.0; HOURS_PER_YEAR])
        .unwrap()
        .with_field(Field::OpaqueSkyCover, vec![0.0; HOURS_PER_YEAR])
        .unwrap();
    let config = MorphConfig::new()
        .with_variable(VariableGroup::CloudsAndRadiation)
        .with_compute_exthor(false);
    let out = morph_record(&rec, &unchanged(), &config).unwrap();
    let failed: Vec<MorphTask> = out.failures().iter().map(|f| f.task).collect();
    assert_eq!(failed, vec![MorphTask::Decomposition]);
    assert_eq!(
        out.failures()[0].error,
        MorphError::MissingField {
            field: "exthorrad_Whm2".to_string()
        }
    );

    let computed = morph_record(&rec, &unchanged(), &config.with_compute_exthor(true)).unwrap();
    assert!(computed.is_complete());
    assert!(computed.field(Field::DirectNormal).unwrap().iter().all(|&v| v == 0.0));
}

#[test]
fn empty_request_is_invalid() {
    let err = morph_record(&record(), &unchanged(), &MorphConfig::new()).unwrap_err();
    assert!(matches!(err, MorphError::InvalidConfig { .. }));
}
