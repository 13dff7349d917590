//! Climatologies and change factors for the Tethys morphing engine.
//!
//! Turns monthly climate-model series into baseline/future climatology
//! pairs and those pairs into month-keyed absolute or relative deltas. Also
//! provides the present-day monthly statistics the morph procedures scale
//! against.
//!
//! # Flow
//!
//! 1. **Ensemble**: members to a percentile series ([`ensemble_percentile`])
//! 2. **Windows**: baseline range from the record, future range from
//!    [`future_period`]
//! 3. **Climatology**: [`climatology_pair`] averages each calendar month
//! 4. **Deltas**: [`ClimatologyPair::absolute_delta`] /
//!    [`ClimatologyPair::relative_delta`]
//!
//! Pairs can be kept in a caller-owned [`ClimatologyStore`].

mod deltas;
mod ensemble;
mod error;
mod model;
mod period;
mod present;
mod set;
mod store;

pub use deltas::{
    absolute_change, absolute_delta, monthly_absolute_delta, monthly_relative_delta,
    relative_change, relative_delta,
};
pub use ensemble::ensemble_percentile;
pub use error::ClimatologyError;
pub use model::{ModelSeries, YearRange, climatology, climatology_pair};
pub use period::future_period;
pub use present::{PresentStats, monthly_mean, present_monthly_stats};
pub use set::{ClimatologyPair, ClimatologySet};
pub use store::{ClimatologyStore, StoreKey};
