//! Extraterrestrial radiation.

use crate::geometry::{SolarGeometry, fractional_year};

/// Solar constant in W/m².
pub const SOLAR_CONSTANT: f64 = 1367.0;

/// Extraterrestrial radiation on a plane normal to the sun, W/m²
/// (Spencer 1971 as given by Duffie & Beckman eq. 1.4.1b).
pub fn normal_extraterrestrial(doy: u16) -> f64 {
    let b = fractional_year(doy);
    SOLAR_CONSTANT
        * (1.000110
            + 0.034221 * b.cos()
            + 0.001280 * b.sin()
            + 0.000719 * (2.0 * b).cos()
            + 0.000077 * (2.0 * b).sin())
}

/// Extraterrestrial radiation on a horizontal plane for every hour,
/// zero while the sun is below the horizon.
///
/// Hourly W/m² equals Wh/m² over the hour.
pub fn horizontal_extraterrestrial(geometry: &SolarGeometry) -> Vec<f64> {
    geometry
        .rows()
        .iter()
        .map(|r| normal_extraterrestrial(r.doy) * r.zenith.to_radians().cos().max(0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use approx::assert_abs_diff_eq;

    #[test]
    fn perihelion_and_aphelion() {
        // Early January near 1414 W/m², early July near 1322 W/m².
        assert_abs_diff_eq!(normal_extraterrestrial(3), 1414.0, epsilon = 2.0);
        assert_abs_diff_eq!(normal_extraterrestrial(185), 1322.0, epsilon = 2.0);
    }

    #[test]
    fn horizontal_zero_at_night() {
        let loc = Location::new(40.0, -75.0, -5.0).unwrap();
        let g = SolarGeometry::compute(&loc);
        let ext = horizontal_extraterrestrial(&g);
        assert_eq!(ext.len(), g.rows().len());
        assert_eq!(ext[0], 0.0);
        assert!(ext[171 * 24 + 12] > 1000.0);
        assert!(ext.iter().all(|&v| v >= 0.0));
    }
}
