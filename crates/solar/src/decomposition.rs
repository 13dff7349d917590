//! Splitting global horizontal radiation into diffuse and direct parts.
//!
//! Diffuse horizontal uses the Ridley-Boland-Lauret logistic model driven by
//! hourly clearness, local solar time, solar altitude, daily clearness and
//! persistence. Direct normal uses Maxwell's (1987) DISC model corrected by
//! the Perez DIRINT coefficients.

use tethys_calendar::HOURS_PER_YEAR;

use crate::clearness::clearness;
use crate::dirint::direct_normal_dirint;
use crate::error::SolarError;
use crate::extraterrestrial::{SOLAR_CONSTANT, normal_extraterrestrial};
use crate::geometry::SolarGeometry;
use crate::persistence::persistence;
use crate::sun_events::SunMarker;

/// Standard sea-level pressure in Pa.
pub const STANDARD_PRESSURE: f64 = 101_325.0;

/// Zenith angle above which DISC returns no direct normal radiation.
pub const DISC_MAX_ZENITH: f64 = 87.0;

/// Solar constant of the DISC extraterrestrial term, W/m².
pub const DISC_SOLAR_CONSTANT: f64 = 1370.0;

const DISC_MAX_AIR_MASS: f64 = 12.0;
const DISC_MIN_COS_ZENITH: f64 = 0.065;

/// Relative optical air mass (Kasten 1966) for a zenith in degrees.
///
/// Returns NaN when the sun is far enough below the horizon that the
/// formula is undefined.
pub fn air_mass(zenith: f64) -> f64 {
    1.0 / (zenith.to_radians().cos() + 0.15 * (93.885 - zenith).powf(-1.253))
}

/// Inputs of the diffuse fraction model for one hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffuseInputs {
    /// Global horizontal radiation, Wh/m².
    pub glohor: f64,
    /// Hourly clearness index.
    pub hourly_clearness: f64,
    /// Local solar time in hours.
    pub local_solar_time: f64,
    /// Solar altitude in degrees.
    pub altitude: f64,
    /// Daily clearness index.
    pub daily_clearness: f64,
    /// Clearness persistence.
    pub persistence: f64,
}

/// Diffuse horizontal radiation for one hour, truncated to a whole Wh/m².
///
/// A non-finite result (e.g. from missing inputs) becomes 0.
pub fn diffuse_horizontal(x: &DiffuseInputs) -> f64 {
    let exponent = -5.38 + 6.63 * x.hourly_clearness + 0.006 * x.local_solar_time
        - 0.007 * x.altitude
        + 1.75 * x.daily_clearness
        + 1.31 * x.persistence;
    let diffuse = x.glohor / (1.0 + exponent.exp());
    if diffuse.is_finite() {
        diffuse.trunc()
    } else {
        0.0
    }
}

/// One hour of the DISC model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscHour {
    /// Direct normal radiation, W/m².
    pub direct: f64,
    /// Clearness index against normal extraterrestrial radiation, in [0, 1].
    pub clearness: f64,
    /// Pressure-corrected air mass, at most 12; NaN when undefined.
    pub air_mass: f64,
}

/// Evaluates the DISC model for one hour.
///
/// `pressure` in Pa corrects the air mass; pass [`STANDARD_PRESSURE`] for
/// none. The direct part is 0 for zenith angles beyond [`DISC_MAX_ZENITH`],
/// for non-positive global radiation and for negative model output;
/// clearness and air mass are reported regardless.
pub fn disc(glohor: f64, zenith: f64, doy: u16, pressure: f64) -> DiscHour {
    let i0 = normal_extraterrestrial(doy) * DISC_SOLAR_CONSTANT / SOLAR_CONSTANT;
    let cos_z = zenith.to_radians().cos().max(DISC_MIN_COS_ZENITH);
    let kt = (glohor / (i0 * cos_z)).clamp(0.0, 1.0);
    let am = air_mass(zenith) * pressure / STANDARD_PRESSURE;
    let am = if am.is_nan() { am } else { am.min(DISC_MAX_AIR_MASS) };

    let (a, b, c) = if kt <= 0.6 {
        (
            0.512 - 1.56 * kt + 2.286 * kt.powi(2) - 2.222 * kt.powi(3),
            0.37 + 0.962 * kt,
            -0.28 + 0.932 * kt - 2.048 * kt.powi(2),
        )
    } else {
        (
            -5.743 + 21.77 * kt - 27.49 * kt.powi(2) + 11.56 * kt.powi(3),
            41.4 - 118.5 * kt + 66.05 * kt.powi(2) + 31.9 * kt.powi(3),
            -47.01 + 184.2 * kt - 222.0 * kt.powi(2) + 73.81 * kt.powi(3),
        )
    };
    let delta_kn = a + b * (c * am).exp();
    let knc = 0.866 - 0.122 * am + 0.0121 * am.powi(2) - 0.000653 * am.powi(3)
        + 0.000014 * am.powi(4);

    let dni = (knc - delta_kn) * i0;
    let lit = glohor.is_finite() && glohor > 0.0 && zenith.is_finite() && zenith <= DISC_MAX_ZENITH;
    DiscHour {
        direct: if lit && dni.is_finite() && dni > 0.0 { dni } else { 0.0 },
        clearness: kt,
        air_mass: am,
    }
}

/// Direct normal radiation for one hour with the plain DISC model.
pub fn direct_normal_disc(glohor: f64, zenith: f64, doy: u16, pressure: f64) -> f64 {
    disc(glohor, zenith, doy, pressure).direct
}

/// Diffuse horizontal and direct normal series of a year.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    diffuse: Vec<f64>,
    direct: Vec<f64>,
}

impl Decomposition {
    /// Diffuse horizontal radiation per hour.
    pub fn diffuse(&self) -> &[f64] {
        &self.diffuse
    }

    /// Direct normal radiation per hour.
    pub fn direct(&self) -> &[f64] {
        &self.direct
    }

    /// Consumes the result, returning `(diffuse, direct)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.diffuse, self.direct)
    }
}

/// Splits an 8760-hour global horizontal series into diffuse horizontal
/// and direct normal components.
///
/// # Errors
///
/// Returns [`SolarError::LengthMismatch`] if any input does not cover the
/// 8760-hour year.
pub fn split_global(
    glohor: &[f64],
    exthor: &[f64],
    geometry: &SolarGeometry,
    markers: &[SunMarker],
) -> Result<Decomposition, SolarError> {
    if geometry.rows().len() != HOURS_PER_YEAR {
        return Err(SolarError::LengthMismatch {
            expected: HOURS_PER_YEAR,
            got: geometry.rows().len(),
            field: "geometry".to_string(),
        });
    }
    let kt = clearness(glohor, exthor)?;
    let daily_kt = kt.daily_per_hour();
    let psi = persistence(kt.hourly(), markers)?;

    let zenith: Vec<f64> = geometry.rows().iter().map(|r| r.zenith).collect();
    let doy: Vec<u16> = geometry.rows().iter().map(|r| r.doy).collect();
    let direct = direct_normal_dirint(glohor, &zenith, &doy, STANDARD_PRESSURE)?;

    let diffuse = geometry
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            diffuse_horizontal(&DiffuseInputs {
                glohor: glohor[i],
                hourly_clearness: kt.hourly()[i],
                local_solar_time: row.local_solar_time,
                altitude: row.altitude(),
                daily_clearness: daily_kt[i],
                persistence: psi[i],
            })
        })
        .collect();
    Ok(Decomposition { diffuse, direct })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn air_mass_values() {
        assert_abs_diff_eq!(air_mass(0.0), 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(air_mass(60.0), 1.99, epsilon = 0.01);
        assert!(air_mass(85.0) > 10.0);
    }

    fn inputs(glohor: f64, kt: f64) -> DiffuseInputs {
        DiffuseInputs {
            glohor,
            hourly_clearness: kt,
            local_solar_time: 12.0,
            altitude: 60.0,
            daily_clearness: kt,
            persistence: kt,
        }
    }

    #[test]
    fn diffuse_is_mostly_global_when_overcast() {
        let d = diffuse_horizontal(&inputs(200.0, 0.1));
        assert!(d > 180.0 && d <= 200.0, "got {d}");
        assert_eq!(d, d.trunc());
    }

    #[test]
    fn diffuse_is_small_fraction_when_clear() {
        let d = diffuse_horizontal(&inputs(800.0, 0.8));
        assert!(d < 200.0, "got {d}");
        assert!(d >= 0.0);
    }

    #[test]
    fn diffuse_zero_for_zero_or_nan_global() {
        assert_eq!(diffuse_horizontal(&inputs(0.0, 0.0)), 0.0);
        assert_eq!(diffuse_horizontal(&inputs(f64::NAN, 0.5)), 0.0);
    }

    #[test]
    fn disc_zero_below_cutoff_and_for_no_light() {
        assert_eq!(direct_normal_disc(100.0, 88.0, 172, STANDARD_PRESSURE), 0.0);
        assert_eq!(direct_normal_disc(0.0, 30.0, 172, STANDARD_PRESSURE), 0.0);
        assert_eq!(direct_normal_disc(-5.0, 30.0, 172, STANDARD_PRESSURE), 0.0);
    }

    #[test]
    fn disc_clear_sky_noon() {
        // Clear summer noon: ghi 900 at zenith 20 gives a strong beam.
        let dni = direct_normal_disc(900.0, 20.0, 172, STANDARD_PRESSURE);
        assert!(dni > 500.0 && dni < 1000.0, "got {dni}");
    }

    #[test]
    fn split_global_shapes_and_night() {
        use crate::extraterrestrial::horizontal_extraterrestrial;
        use crate::location::Location;
        use crate::sun_events::sunrise_sunset_markers;

        let loc = Location::new(40.0, -75.0, -5.0).unwrap();
        let geometry = SolarGeometry::compute(&loc);
        let exthor = horizontal_extraterrestrial(&geometry);
        let glohor: Vec<f64> = exthor.iter().map(|e| e * 0.5).collect();
        let markers = sunrise_sunset_markers(&loc);

        let parts = split_global(&glohor, &exthor, &geometry, &markers).unwrap();
        assert_eq!(parts.diffuse().len(), HOURS_PER_YEAR);
        assert_eq!(parts.direct().len(), HOURS_PER_YEAR);
        assert_eq!(parts.diffuse()[0], 0.0);
        assert_eq!(parts.direct()[0], 0.0);
        for (d, g) in parts.diffuse().iter().zip(&glohor) {
            assert!(*d >= 0.0 && *d <= *g);
        }
        assert!(parts.direct()[171 * 24 + 12] > 0.0);
    }

    #[test]
    fn split_global_rejects_short_input() {
        use crate::location::Location;
        let loc = Location::new(0.0, 0.0, 0.0).unwrap();
        let geometry = SolarGeometry::compute(&loc);
        let markers = vec![SunMarker::Other; HOURS_PER_YEAR];
        assert!(split_global(&[1.0; 10], &[1.0; 10], &geometry, &markers).is_err());
    }

    #[test]
    fn disc_reports_clearness_and_air_mass_at_night() {
        let h = disc(0.0, 100.0, 172, STANDARD_PRESSURE);
        assert_eq!(h.direct, 0.0);
        assert_eq!(h.clearness, 0.0);
        assert!(h.air_mass.is_nan());

        let h = disc(500.0, 60.0, 172, STANDARD_PRESSURE);
        assert_abs_diff_eq!(h.air_mass, air_mass(60.0), epsilon = 1e-12);
        assert!(h.clearness > 0.0 && h.clearness <= 1.0);
    }

    #[test]
    fn split_global_direct_follows_dirint() {
        use crate::extraterrestrial::horizontal_extraterrestrial;
        use crate::location::Location;
        use crate::sun_events::sunrise_sunset_markers;

        let loc = Location::new(40.0, -75.0, -5.0).unwrap();
        let geometry = SolarGeometry::compute(&loc);
        let exthor = horizontal_extraterrestrial(&geometry);
        let glohor: Vec<f64> = exthor.iter().map(|e| e * 0.7).collect();
        let parts = split_global(&glohor, &exthor, &geometry, &sunrise_sunset_markers(&loc)).unwrap();

        // The coefficient moves the beam away from plain DISC at noon.
        let noon = 171 * 24 + 12;
        let row = &geometry.rows()[noon];
        let plain = direct_normal_disc(glohor[noon], row.zenith, row.doy, STANDARD_PRESSURE);
        assert!(parts.direct()[noon] > 0.0);
        assert!((parts.direct()[noon] - plain).abs() > 1.0, "dirint equals disc: {plain}");
    }

    #[test]
    fn disc_overcast_is_small() {
        let dni = direct_normal_disc(100.0, 40.0, 172, STANDARD_PRESSURE);
        assert!(dni < 50.0, "got {dni}");
    }
}
