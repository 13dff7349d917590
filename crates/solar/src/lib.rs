//! # tethys-solar
//!
//! Solar position, clearness and radiation decomposition over the 8760-hour
//! reference year.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     L["Location"] --> G["SolarGeometry::compute"]
//!     L --> M["sunrise_sunset_markers"]
//!     G --> E["horizontal_extraterrestrial"]
//!     GH["glohor"] --> C["clearness"]
//!     E --> C
//!     C --> P["persistence"]
//!     M --> P
//!     C --> S["split_global"]
//!     P --> S
//!     G --> S
//!     S --> D["diffuse horizontal + direct normal"]
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `geometry` | Spencer equation of time / declination, hourly zenith table |
//! | `sun_events` | Sunrise/sunset/first/last-hour markers |
//! | `extraterrestrial` | Normal and horizontal extraterrestrial radiation |
//! | `clearness` | Hourly and daily clearness index |
//! | `persistence` | Clearness persistence from neighbouring hours |
//! | `decomposition` | Diffuse (logistic) and direct normal split, DISC model |
//! | `dirint` | Perez DIRINT coefficients applied to DISC |

mod clearness;
mod decomposition;
mod dirint;
mod error;
mod extraterrestrial;
mod geometry;
mod location;
mod persistence;
mod sun_events;

pub use clearness::{Clearness, clearness};
pub use decomposition::{
    DISC_MAX_ZENITH, DISC_SOLAR_CONSTANT, Decomposition, DiffuseInputs, DiscHour,
    STANDARD_PRESSURE, air_mass, diffuse_horizontal, direct_normal_disc, disc, split_global,
};
pub use dirint::{
    clearness_variability, dirint_coefficient, direct_normal_dirint, precipitable_water,
    zenith_independent_clearness,
};
pub use error::SolarError;
pub use extraterrestrial::{SOLAR_CONSTANT, horizontal_extraterrestrial, normal_extraterrestrial};
pub use geometry::{
    SolarGeometry, SolarGeometryRow, declination, equation_of_time, fractional_year, hour_angle,
    local_solar_time, local_time_meridian, solar_altitude, time_correction, zenith,
};
pub use location::Location;
pub use persistence::persistence;
pub use sun_events::{SUNRISE_ALTITUDE, SunMarker, sunrise_sunset_hours, sunrise_sunset_markers};
