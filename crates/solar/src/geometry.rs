//! Hourly solar position for the 365-day reference year.
//!
//! Day-dependent terms use Spencer's (1971) Fourier series in the
//! fractional year `B = 2π(n - 1)/365`. Times are local standard clock
//! time; hour `h` of day `n` is evaluated at clock time `h`.

use std::f64::consts::PI;

use tethys_calendar::{DAYS_PER_YEAR, HOURS_PER_DAY, HOURS_PER_YEAR, hour_sequence};

use crate::location::Location;

/// Spencer's fractional year in radians for day-of-year `doy`.
pub fn fractional_year(doy: u16) -> f64 {
    2.0 * PI * (f64::from(doy) - 1.0) / DAYS_PER_YEAR as f64
}

/// Equation of time in minutes (Spencer 1971).
pub fn equation_of_time(doy: u16) -> f64 {
    let b = fractional_year(doy);
    229.18
        * (0.000075 + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

/// Solar declination in degrees (Spencer 1971).
pub fn declination(doy: u16) -> f64 {
    let b = fractional_year(doy);
    let rad = 0.006918 - 0.399912 * b.cos() + 0.070257 * b.sin() - 0.006758 * (2.0 * b).cos()
        + 0.000907 * (2.0 * b).sin()
        - 0.002697 * (3.0 * b).cos()
        + 0.001480 * (3.0 * b).sin();
    rad.to_degrees()
}

/// Longitude of the time zone's central meridian, in degrees.
pub fn local_time_meridian(utc_offset: f64) -> f64 {
    15.0 * utc_offset
}

/// Minutes to add to clock time to obtain local solar time.
pub fn time_correction(longitude: f64, local_time_meridian: f64, equation_of_time: f64) -> f64 {
    4.0 * (longitude - local_time_meridian) + equation_of_time
}

/// Local solar time in hours.
pub fn local_solar_time(clock_hour: f64, time_correction: f64) -> f64 {
    clock_hour + time_correction / 60.0
}

/// Hour angle in degrees, negative before solar noon.
pub fn hour_angle(local_solar_time: f64) -> f64 {
    15.0 * (local_solar_time - 12.0)
}

/// Solar zenith in degrees.
pub fn zenith(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let (phi, delta, omega) = (
        latitude.to_radians(),
        declination.to_radians(),
        hour_angle.to_radians(),
    );
    let cos_z = phi.sin() * delta.sin() + phi.cos() * delta.cos() * omega.cos();
    cos_z.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Solar altitude in degrees.
pub fn solar_altitude(zenith: f64) -> f64 {
    90.0 - zenith
}

/// Solar position of one hour of the year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarGeometryRow {
    /// Day of year (1..=365).
    pub doy: u16,
    /// Clock hour (0..=23).
    pub hour: u8,
    /// Equation of time in minutes.
    pub equation_of_time: f64,
    /// Declination in degrees.
    pub declination: f64,
    /// Time-zone meridian in degrees.
    pub local_time_meridian: f64,
    /// Time correction in minutes.
    pub time_correction: f64,
    /// Local solar time in hours.
    pub local_solar_time: f64,
    /// Hour angle in degrees.
    pub hour_angle: f64,
    /// Zenith angle in degrees.
    pub zenith: f64,
}

impl SolarGeometryRow {
    /// Solar altitude in degrees.
    pub fn altitude(&self) -> f64 {
        solar_altitude(self.zenith)
    }
}

/// Solar geometry for every hour of the reference year.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarGeometry {
    location: Location,
    rows: Vec<SolarGeometryRow>,
}

impl SolarGeometry {
    /// Computes the 8760-row table for `location`.
    pub fn compute(location: &Location) -> Self {
        let ltm = local_time_meridian(location.utc_offset());
        let mut rows = Vec::with_capacity(HOURS_PER_YEAR);
        let (mut eot, mut decl) = (0.0, 0.0);

        for h in hour_sequence() {
            let doy = h.doy().get();
            if h.index() % HOURS_PER_DAY == 0 {
                eot = equation_of_time(doy);
                decl = declination(doy);
            }
            let tc = time_correction(location.longitude(), ltm, eot);
            let lst = local_solar_time(f64::from(h.hour()), tc);
            let omega = hour_angle(lst);
            rows.push(SolarGeometryRow {
                doy,
                hour: h.hour(),
                equation_of_time: eot,
                declination: decl,
                local_time_meridian: ltm,
                time_correction: tc,
                local_solar_time: lst,
                hour_angle: omega,
                zenith: zenith(location.latitude(), decl, omega),
            });
        }
        Self {
            location: *location,
            rows,
        }
    }

    /// Location the table was computed for.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// All rows, hour 0 first.
    pub fn rows(&self) -> &[SolarGeometryRow] {
        &self.rows
    }

    /// Zenith angle of every hour.
    pub fn zeniths(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.zenith).collect()
    }

    /// Solar altitude of every hour.
    pub fn altitudes(&self) -> Vec<f64> {
        self.rows.iter().map(SolarGeometryRow::altitude).collect()
    }

    /// Local solar time of every hour.
    pub fn local_solar_times(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.local_solar_time).collect()
    }

    /// Day of year of every hour.
    pub fn doys(&self) -> Vec<u16> {
        self.rows.iter().map(|r| r.doy).collect()
    }
}
