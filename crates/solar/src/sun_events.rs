//! Sunrise/sunset markers over the 8760-hour year.
//!
//! Each hour carries a [`SunMarker`] telling the persistence calculation
//! which neighbouring hours are usable: the first and last hour of the year
//! have only one neighbour, the sunrise hour looks forward into daylight and
//! the sunset hour looks back.

use tethys_calendar::{DAYS_PER_YEAR, HOURS_PER_DAY, HOURS_PER_YEAR};
use tracing::debug;

use crate::geometry::{declination, equation_of_time, local_time_meridian, time_correction};
use crate::location::Location;

/// Role of an hour for clearness persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SunMarker {
    /// Any other hour.
    Other = 0,
    /// Hour 0 of the year.
    FirstHour = 1,
    /// Hour containing sunrise.
    Sunrise = 2,
    /// Hour containing sunset.
    Sunset = 3,
    /// Hour 8759 of the year.
    LastHour = 4,
}

impl SunMarker {
    /// Numeric code (0..=4).
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Solar altitude at sunrise and sunset in degrees: refraction plus the
/// solar half-disc put the sun's centre below the geometric horizon.
pub const SUNRISE_ALTITUDE: f64 = -0.833;

/// Sunrise and sunset in local clock hours (0..24) for `doy`, or `None`
/// during polar night or midnight sun.
///
/// Times wrap onto the 24-hour clock, so a site whose time zone sits across
/// the date line from its longitude still gets its events. After wrapping
/// sunset may be earlier in the clock day than sunrise.
pub fn sunrise_sunset_hours(location: &Location, doy: u16) -> Option<(f64, f64)> {
    let phi = location.latitude().to_radians();
    let delta = declination(doy).to_radians();
    let cos_ws = (SUNRISE_ALTITUDE.to_radians().sin() - phi.sin() * delta.sin())
        / (phi.cos() * delta.cos());
    if !cos_ws.is_finite() || cos_ws.abs() >= 1.0 {
        return None;
    }
    let half_day = cos_ws.acos().to_degrees() / 15.0;
    let tc = time_correction(
        location.longitude(),
        local_time_meridian(location.utc_offset()),
        equation_of_time(doy),
    );
    let solar_noon = 12.0 - tc / 60.0;
    let day = HOURS_PER_DAY as f64;
    Some((
        (solar_noon - half_day).rem_euclid(day),
        (solar_noon + half_day).rem_euclid(day),
    ))
}

/// Clock hour (0..=23) containing `time`.
fn containing_hour(time: f64) -> usize {
    (time.floor() as usize).min(HOURS_PER_DAY - 1)
}

/// Builds the marker of every hour of the year for `location`.
///
/// Hour 0 is always [`SunMarker::FirstHour`] and hour 8759 always
/// [`SunMarker::LastHour`]. When sunrise and sunset fall in the same clock
/// hour that hour stays [`SunMarker::Other`].
pub fn sunrise_sunset_markers(location: &Location) -> Vec<SunMarker> {
    let mut markers = vec![SunMarker::Other; HOURS_PER_YEAR];
    let mut polar_days = 0;

    for day in 0..DAYS_PER_YEAR {
        let Some((rise, set)) = sunrise_sunset_hours(location, day as u16 + 1) else {
            polar_days += 1;
            continue;
        };
        let rise_hour = containing_hour(rise);
        let set_hour = containing_hour(set);
        if rise_hour == set_hour {
            continue;
        }
        markers[day * HOURS_PER_DAY + rise_hour] = SunMarker::Sunrise;
        markers[day * HOURS_PER_DAY + set_hour] = SunMarker::Sunset;
    }

    if polar_days > 0 {
        debug!(latitude = location.latitude(), polar_days, "days without sunrise or sunset");
    }
    markers[0] = SunMarker::FirstHour;
    markers[HOURS_PER_YEAR - 1] = SunMarker::LastHour;
    markers
}
