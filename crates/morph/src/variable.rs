//! Variable groups, model variables and weather-record fields.

use std::fmt;
use std::str::FromStr;

use crate::error::MorphError;

/// A user-facing group of weather variables to morph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VariableGroup {
    /// Dry-bulb temperature.
    Temperature,
    /// Relative humidity.
    Humidity,
    /// Atmospheric station pressure.
    Pressure,
    /// Dew-point temperature (recomputed from temperature and humidity).
    DewPoint,
    /// Wind speed.
    Wind,
    /// Solar radiation components and sky cover.
    CloudsAndRadiation,
}

impl VariableGroup {
    /// Every group, in evaluation-friendly order.
    pub const ALL: [VariableGroup; 6] = [
        VariableGroup::Temperature,
        VariableGroup::Humidity,
        VariableGroup::Pressure,
        VariableGroup::DewPoint,
        VariableGroup::Wind,
        VariableGroup::CloudsAndRadiation,
    ];

    /// Display name, e.g. `"Clouds and Radiation"`.
    pub fn name(self) -> &'static str {
        match self {
            VariableGroup::Temperature => "Temperature",
            VariableGroup::Humidity => "Humidity",
            VariableGroup::Pressure => "Pressure",
            VariableGroup::DewPoint => "Dew Point",
            VariableGroup::Wind => "Wind",
            VariableGroup::CloudsAndRadiation => "Clouds and Radiation",
        }
    }

    /// Model variables the group needs, including those of groups it
    /// depends on.
    pub fn model_variables(self) -> &'static [ModelVariable] {
        use ModelVariable::*;
        match self {
            VariableGroup::Temperature => &[Tas, Tasmax, Tasmin],
            VariableGroup::Humidity => &[Huss],
            VariableGroup::Pressure => &[Psl],
            VariableGroup::DewPoint => &[Tas, Tasmax, Tasmin, Huss],
            VariableGroup::Wind => &[Uas, Vas],
            VariableGroup::CloudsAndRadiation => &[Clt, Rsds],
        }
    }
}

impl fmt::Display for VariableGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariableGroup {
    type Err = MorphError;

    /// Parses a display name, ignoring case, spaces and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        VariableGroup::ALL
            .into_iter()
            .find(|g| g.name().replace(' ', "").to_lowercase() == norm)
            .ok_or_else(|| MorphError::UnknownName {
                kind: "variable".to_string(),
                name: s.to_string(),
            })
    }
}

/// A monthly climate-model variable (CMIP6 ids).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModelVariable {
    /// Near-surface air temperature.
    Tas,
    /// Daily maximum near-surface air temperature.
    Tasmax,
    /// Daily minimum near-surface air temperature.
    Tasmin,
    /// Near-surface specific humidity.
    Huss,
    /// Sea-level pressure.
    Psl,
    /// Eastward near-surface wind.
    Uas,
    /// Northward near-surface wind.
    Vas,
    /// Total cloud cover percentage.
    Clt,
    /// Surface downwelling shortwave radiation.
    Rsds,
}

impl ModelVariable {
    /// Every model variable.
    pub const ALL: [ModelVariable; 9] = [
        ModelVariable::Tas,
        ModelVariable::Tasmax,
        ModelVariable::Tasmin,
        ModelVariable::Huss,
        ModelVariable::Psl,
        ModelVariable::Uas,
        ModelVariable::Vas,
        ModelVariable::Clt,
        ModelVariable::Rsds,
    ];

    /// Model id, e.g. `"tasmax"`.
    pub fn id(self) -> &'static str {
        match self {
            ModelVariable::Tas => "tas",
            ModelVariable::Tasmax => "tasmax",
            ModelVariable::Tasmin => "tasmin",
            ModelVariable::Huss => "huss",
            ModelVariable::Psl => "psl",
            ModelVariable::Uas => "uas",
            ModelVariable::Vas => "vas",
            ModelVariable::Clt => "clt",
            ModelVariable::Rsds => "rsds",
        }
    }
}

impl fmt::Display for ModelVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// An hourly field of a weather record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Dry-bulb temperature, °C.
    DryBulb,
    /// Dew-point temperature, °C.
    DewPoint,
    /// Relative humidity, %.
    RelativeHumidity,
    /// Atmospheric station pressure, Pa.
    AtmosphericPressure,
    /// Extraterrestrial horizontal radiation, Wh/m².
    ExtraterrestrialHorizontal,
    /// Global horizontal radiation, Wh/m².
    GlobalHorizontal,
    /// Direct normal radiation, Wh/m².
    DirectNormal,
    /// Diffuse horizontal radiation, Wh/m².
    DiffuseHorizontal,
    /// Wind speed, m/s.
    WindSpeed,
    /// Total sky cover, tenths.
    TotalSkyCover,
    /// Opaque sky cover, tenths.
    OpaqueSkyCover,
}

impl Field {
    /// Every field.
    pub const ALL: [Field; 11] = [
        Field::DryBulb,
        Field::DewPoint,
        Field::RelativeHumidity,
        Field::AtmosphericPressure,
        Field::ExtraterrestrialHorizontal,
        Field::GlobalHorizontal,
        Field::DirectNormal,
        Field::DiffuseHorizontal,
        Field::WindSpeed,
        Field::TotalSkyCover,
        Field::OpaqueSkyCover,
    ];

    /// Column key with units, e.g. `"drybulb_C"`.
    pub fn key(self) -> &'static str {
        match self {
            Field::DryBulb => "drybulb_C",
            Field::DewPoint => "dewpoint_C",
            Field::RelativeHumidity => "relhum_percent",
            Field::AtmosphericPressure => "atmos_Pa",
            Field::ExtraterrestrialHorizontal => "exthorrad_Whm2",
            Field::GlobalHorizontal => "glohorrad_Whm2",
            Field::DirectNormal => "dirnorrad_Whm2",
            Field::DiffuseHorizontal => "difhorrad_Whm2",
            Field::WindSpeed => "windspd_ms",
            Field::TotalSkyCover => "totskycvr_tenths",
            Field::OpaqueSkyCover => "opaqskycvr_tenths",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| MorphError::UnknownName {
                kind: "field".to_string(),
                name: s.to_string(),
            })
    }
}
