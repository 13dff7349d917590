//! Integration test: documents written to disk and read back.

use std::collections::BTreeMap;
use std::path::Path;

use tethys_calendar::{HOURS_PER_YEAR, MonthKeyed};
use tethys_climatology::{ClimatologyPair, ClimatologySet, YearRange};
use tethys_io::{
    HISTORICAL, IoError, ModelDataDoc, SeriesDoc, SolarTableDoc, read_model_data,
    read_morph_output, read_weather_record, write_morph_output, write_solar_table,
    write_weather_record,
};
use tethys_morph::{Field, MorphConfig, VariableGroup, WeatherRecord, morph_record};
use tethys_solar::{Location, SolarGeometry, sunrise_sunset_markers};

fn record() -> WeatherRecord {
    WeatherRecord::new(
        Location::new(-33.9, 151.2, 10.0).unwrap().with_elevation(39.0),
        YearRange::new(1985, 2014).unwrap(),
    )
    .with_field(Field::WindSpeed, (0..HOURS_PER_YEAR).map(|i| (i % 7) as f64).collect())
    .unwrap()
    .with_field(Field::AtmosphericPressure, vec![100_900.0; HOURS_PER_YEAR])
    .unwrap()
}

// ---- 1. Weather records ----

#[test]
fn weather_record_survives_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("record.json");
    let rec = record();
    write_weather_record(&path, &rec).unwrap();
    let back = read_weather_record(&path).unwrap();
    assert_eq!(back, rec);
}

#[test]
fn missing_file_is_reported() {
    let err = read_weather_record(Path::new("/tmp/tethys_no_such_record.json")).unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}"
    );
}

#[test]
fn malformed_json_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ \"location\": ").unwrap();
    let err = read_weather_record(&path).unwrap_err();
    assert!(matches!(err, IoError::Json { .. }), "got {err:?}");
}

// ---- 2. Model data ----

#[test]
fn model_data_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("models.json");
    let series = |start_year, years: usize| SeriesDoc {
        start_year,
        values: vec![280.0; years * 12],
    };
    let doc: ModelDataDoc = BTreeMap::from([
        (
            HISTORICAL.to_string(),
            BTreeMap::from([(
                "psl".to_string(),
                BTreeMap::from([("M1".to_string(), series(1980, 35))]),
            )]),
        ),
        (
            "ssp370".to_string(),
            BTreeMap::from([(
                "psl".to_string(),
                BTreeMap::from([("M1".to_string(), series(2015, 60))]),
            )]),
        ),
    ]);
    std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

    let data = read_model_data(&path).unwrap();
    let paired = data.paired("ssp370", "psl").unwrap();
    assert_eq!(paired.historical[0].n_years(), 35);
    assert_eq!(paired.scenario[0].end_year(), 2074);
}

// ---- 3. Morph output and solar tables ----

#[test]
fn morph_output_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    let pair = |b: f64, f: f64| {
        ClimatologyPair::new(MonthKeyed::from_array([b; 12]), MonthKeyed::from_array([f; 12]))
    };
    let set = ClimatologySet::new("ssp585", 90)
        .with_pair("uas", pair(2.0, 2.0))
        .with_pair("vas", pair(0.0, 0.0));
    let config = MorphConfig::new()
        .with_variable(VariableGroup::Wind)
        .with_variable(VariableGroup::Pressure);
    let out = morph_record(&record(), &set, &config).unwrap();

    let baseline = YearRange::new(1985, 2014).unwrap();
    let future = YearRange::new(2035, 2064).unwrap();
    write_morph_output(&path, &out, baseline, future).unwrap();
    let doc = read_morph_output(&path).unwrap();

    assert_eq!(doc.pathway, "ssp585");
    assert_eq!(doc.percentile, 90);
    assert_eq!(doc.future.start, 2035);
    assert_eq!(doc.fields["windspd_ms"].len(), HOURS_PER_YEAR);
    assert_eq!(doc.failures.len(), 1);
    assert_eq!(doc.failures[0].variable, "Pressure");
    assert!(doc.failures[0].error.contains("psl"));
}

#[test]
fn solar_table_has_markers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solar.json");
    let loc = Location::new(51.5, -0.1, 0.0).unwrap();
    let geometry = SolarGeometry::compute(&loc);
    let markers = sunrise_sunset_markers(&loc);
    write_solar_table(&path, &geometry, &markers).unwrap();

    let doc: SolarTableDoc =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc.rows.len(), HOURS_PER_YEAR);
    assert_eq!(doc.rows[0].marker, 1);
    assert_eq!(doc.rows[HOURS_PER_YEAR - 1].marker, 4);
    assert_eq!(doc.location.latitude, 51.5);

    assert!(SolarTableDoc::new(&geometry, &markers[..10]).is_err());
}
