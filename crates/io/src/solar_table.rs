//! Solar geometry dumps for inspection.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tethys_solar::{SolarGeometry, SunMarker};

use crate::error::IoError;
use crate::json::write_json;
use crate::record::LocationDoc;

/// One hour of solar geometry with its sunrise/sunset marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarRowDoc {
    /// Day of year, 1..=365.
    pub doy: u16,
    /// Clock hour of day, 0..=23.
    pub hour: u8,
    /// Minutes.
    pub equation_of_time: f64,
    /// Degrees.
    pub declination: f64,
    /// Degrees.
    pub local_time_meridian: f64,
    /// Minutes.
    pub time_correction: f64,
    /// Hours.
    pub local_solar_time: f64,
    /// Degrees.
    pub hour_angle: f64,
    /// Degrees.
    pub zenith: f64,
    /// Marker code (0 other, 1 first hour, 2 sunrise, 3 sunset, 4 last hour).
    pub marker: u8,
}

/// Solar geometry of a site for every hour of the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarTableDoc {
    /// Site.
    pub location: LocationDoc,
    /// 8760 rows.
    pub rows: Vec<SolarRowDoc>,
}

impl SolarTableDoc {
    /// Builds the table from computed geometry and markers.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `markers` does not have one entry
    /// per geometry row.
    pub fn new(geometry: &SolarGeometry, markers: &[SunMarker]) -> Result<Self, IoError> {
        if markers.len() != geometry.rows().len() {
            return Err(IoError::Validation {
                count: 1,
                details: format!(
                    "{} markers for {} geometry rows",
                    markers.len(),
                    geometry.rows().len()
                ),
            });
        }
        let rows = geometry
            .rows()
            .iter()
            .zip(markers)
            .map(|(r, m)| SolarRowDoc {
                doy: r.doy,
                hour: r.hour,
                equation_of_time: r.equation_of_time,
                declination: r.declination,
                local_time_meridian: r.local_time_meridian,
                time_correction: r.time_correction,
                local_solar_time: r.local_solar_time,
                hour_angle: r.hour_angle,
                zenith: r.zenith,
                marker: m.code(),
            })
            .collect();
        Ok(Self {
            location: LocationDoc::from(geometry.location()),
            rows,
        })
    }
}

/// Writes a solar geometry table.
///
/// # Errors
///
/// Returns [`IoError::Validation`], [`IoError::Io`] or [`IoError::Json`].
pub fn write_solar_table(
    path: &Path,
    geometry: &SolarGeometry,
    markers: &[SunMarker],
) -> Result<(), IoError> {
    write_json(path, &SolarTableDoc::new(geometry, markers)?)
}
