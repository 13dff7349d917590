//! # tethys-calendar
//!
//! Calendar arithmetic for annual hourly weather records on a 365-day year.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["HourOfYear (0..8760)"] -->|".doy()"| B["Doy (1..=365)"]
//!     B -->|".month()"| C["month (1..=12)"]
//!     D["month_index()"] -->|"MonthKeyed::gather()"| E["per-hour factors"]
//!     F["12 values"] -->|"MonthKeyed::from_slice()"| G["MonthKeyed"]
//!     H["365 values"] -->|"DayKeyed::from_slice()"| I["DayKeyed"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use tethys_calendar::{MonthKeyed, month_index};
//!
//! let factors = MonthKeyed::from_slice(&[1.1; 12])?;
//! let per_hour = factors.gather(&month_index())?;
//! assert_eq!(per_hour.len(), 8760);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Day-of-year newtype and month tables |
//! | `hour` | Hour-of-year newtype and dense month/day indices |
//! | `keyed` | Month- and day-keyed tables with shape checks |
//! | `sequence` | Hour sequence generation |
//! | `error` | Error types |

mod doy;
mod error;
mod hour;
mod keyed;
mod sequence;

pub use doy::{DAYS_PER_MONTH, DAYS_PER_YEAR, Doy, days_in_month};
pub use error::CalendarError;
pub use hour::{HOURS_PER_DAY, HOURS_PER_YEAR, HourOfYear, day_index, hours_in_month, month_index};
pub use keyed::{DayKeyed, MonthKeyed};
pub use sequence::hour_sequence;
