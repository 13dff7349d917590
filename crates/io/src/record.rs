//! Weather record documents.
//!
//! ```json
//! {
//!   "location": { "latitude": 47.4, "longitude": 8.5, "utc_offset": 1.0, "elevation": 420.0 },
//!   "baseline": { "start": 1985, "end": 2014 },
//!   "fields": { "drybulb_C": [ ... 8760 values ... ], "relhum_percent": [ ... ] }
//! }
//! ```
//!
//! Field keys that are not morph fields are skipped with a warning.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tethys_climatology::YearRange;
use tethys_morph::{Field, WeatherRecord};
use tethys_solar::Location;
use tracing::{debug, warn};

use crate::error::IoError;
use crate::json::{read_json, write_json};
use crate::validate::{ValidationCollector, check_hourly};

/// Site of a weather record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationDoc {
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
    /// Hours from UTC of the record's clock.
    pub utc_offset: f64,
    /// Metres above sea level.
    #[serde(default)]
    pub elevation: f64,
}

impl LocationDoc {
    /// Validated site location.
    pub fn to_location(&self) -> Result<Location, IoError> {
        Ok(Location::new(self.latitude, self.longitude, self.utc_offset)?
            .with_elevation(self.elevation))
    }
}

impl From<&Location> for LocationDoc {
    fn from(loc: &Location) -> Self {
        Self {
            latitude: loc.latitude(),
            longitude: loc.longitude(),
            utc_offset: loc.utc_offset(),
            elevation: loc.elevation(),
        }
    }
}

/// Inclusive year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRangeDoc {
    /// First year.
    pub start: i32,
    /// Last year.
    pub end: i32,
}

impl From<YearRange> for YearRangeDoc {
    fn from(range: YearRange) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
        }
    }
}

impl YearRangeDoc {
    /// Validated year range.
    pub fn to_range(self) -> Result<YearRange, IoError> {
        Ok(YearRange::new(self.start, self.end)?)
    }
}

/// On-disk form of a [`WeatherRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecordDoc {
    /// Site.
    pub location: LocationDoc,
    /// Years the record represents.
    pub baseline: YearRangeDoc,
    /// Hourly series keyed by field key.
    pub fields: BTreeMap<String, Vec<f64>>,
}

impl WeatherRecordDoc {
    /// Converts the document into a record, validating every series.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every series that does not
    /// cover the year, or a wrapped error for an invalid location or range.
    pub fn into_record(self) -> Result<WeatherRecord, IoError> {
        let location = self.location.to_location()?;
        let baseline = self.baseline.to_range()?;

        let mut c = ValidationCollector::new();
        let mut known = Vec::new();
        for (key, values) in self.fields {
            match key.parse::<Field>() {
                Ok(field) => {
                    check_hourly(&mut c, &key, &values);
                    known.push((field, values));
                }
                Err(_) => warn!(field = %key, "skipping unknown weather field"),
            }
        }
        c.finish()?;

        let mut record = WeatherRecord::new(location, baseline);
        for (field, values) in known {
            record.insert(field, values)?;
        }
        Ok(record)
    }
}

impl From<&WeatherRecord> for WeatherRecordDoc {
    fn from(record: &WeatherRecord) -> Self {
        Self {
            location: LocationDoc::from(record.location()),
            baseline: record.baseline_range().into(),
            fields: record
                .fields()
                .map(|(f, v)| (f.key().to_string(), v.to_vec()))
                .collect(),
        }
    }
}

/// Reads a weather record document.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`], [`IoError::Json`] or
/// [`IoError::Validation`].
pub fn read_weather_record(path: &Path) -> Result<WeatherRecord, IoError> {
    let doc: WeatherRecordDoc = read_json(path)?;
    let record = doc.into_record()?;
    debug!(path = %path.display(), fields = record.fields().count(), "read weather record");
    Ok(record)
}

/// Writes a weather record document.
///
/// # Errors
///
/// Returns [`IoError::Io`] or [`IoError::Json`] on write failure.
pub fn write_weather_record(path: &Path, record: &WeatherRecord) -> Result<(), IoError> {
    write_json(path, &WeatherRecordDoc::from(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tethys_calendar::HOURS_PER_YEAR;

    fn doc() -> WeatherRecordDoc {
        WeatherRecordDoc {
            location: LocationDoc {
                latitude: 47.4,
                longitude: 8.5,
                utc_offset: 1.0,
                elevation: 420.0,
            },
            baseline: YearRangeDoc {
                start: 1985,
                end: 2014,
            },
            fields: BTreeMap::from([
                ("drybulb_C".to_string(), vec![10.0; HOURS_PER_YEAR]),
                ("winddir_deg".to_string(), vec![180.0; 3]),
            ]),
        }
    }

    #[test]
    fn unknown_fields_are_skipped() {
        let record = doc().into_record().unwrap();
        assert_eq!(record.fields().count(), 1);
        assert_eq!(record.location().elevation(), 420.0);
        assert_eq!(record.baseline_range().start(), 1985);
    }

    #[test]
    fn short_series_is_validation_error() {
        let mut d = doc();
        d.fields.insert("relhum_percent".to_string(), vec![50.0; 10]);
        d.fields.insert("atmos_Pa".to_string(), vec![1.0; 8761]);
        match d.into_record().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert!(details.contains("relhum_percent has 10 values"));
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn invalid_location_is_rejected() {
        let mut d = doc();
        d.location.latitude = 120.0;
        assert!(matches!(d.into_record(), Err(IoError::Solar(_))));
    }

    #[test]
    fn elevation_defaults_to_zero() {
        let json = r#"{"latitude": 1.0, "longitude": 2.0, "utc_offset": 0.0}"#;
        let loc: LocationDoc = serde_json::from_str(json).unwrap();
        assert_eq!(loc.elevation, 0.0);
    }
}
