//! # tethys-io
//!
//! JSON documents for the morphing workflow: present-day weather records,
//! monthly climate-model data, morph output and solar geometry tables.
//! Bridges files on disk into the typed values of `tethys-morph` and
//! `tethys-climatology`, validating series lengths on read.

mod error;
mod json;
mod model_data;
mod output;
mod record;
mod solar_table;
mod validate;

pub use error::IoError;
pub use model_data::{
    HISTORICAL, ModelData, ModelDataDoc, PairedMembers, SeriesDoc, read_model_data,
};
pub use output::{FailureDoc, MorphOutputDoc, read_morph_output, write_morph_output};
pub use record::{
    LocationDoc, WeatherRecordDoc, YearRangeDoc, read_weather_record, write_weather_record,
};
pub use solar_table::{SolarRowDoc, SolarTableDoc, write_solar_table};
