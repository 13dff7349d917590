//! Site location.

use crate::error::SolarError;

/// Geographic position and standard time zone of a weather station.
///
/// Longitude is positive east of Greenwich, UTC offset in hours (e.g. -5
/// for US Eastern standard time).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
    elevation: f64,
    utc_offset: f64,
}

impl Location {
    /// Creates a location at sea level.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::InvalidLatitude`], [`SolarError::InvalidLongitude`]
    /// or [`SolarError::InvalidUtcOffset`] for out-of-range values.
    pub fn new(latitude: f64, longitude: f64, utc_offset: f64) -> Result<Self, SolarError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(SolarError::InvalidLatitude { latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(SolarError::InvalidLongitude { longitude });
        }
        if !utc_offset.is_finite() || !(-12.0..=14.0).contains(&utc_offset) {
            return Err(SolarError::InvalidUtcOffset { offset: utc_offset });
        }
        Ok(Self {
            latitude,
            longitude,
            elevation: 0.0,
            utc_offset,
        })
    }

    /// Sets the elevation above sea level in metres.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Latitude in degrees, north positive.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, east positive.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Elevation in metres.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Offset of local standard time from UTC, in hours.
    pub fn utc_offset(&self) -> f64 {
        self.utc_offset
    }
}
