//! Present-day weather record.

use std::collections::BTreeMap;

use tethys_calendar::HOURS_PER_YEAR;
use tethys_climatology::YearRange;
use tethys_solar::Location;

use crate::error::MorphError;
use crate::variable::Field;

/// An 8760-hour weather record with its site and the years it represents.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    location: Location,
    baseline_range: YearRange,
    fields: BTreeMap<Field, Vec<f64>>,
}

impl WeatherRecord {
    /// Creates a record with no fields.
    pub fn new(location: Location, baseline_range: YearRange) -> Self {
        Self {
            location,
            baseline_range,
            fields: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) a field.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::LengthMismatch`] unless `values` has 8760 entries.
    pub fn with_field(mut self, field: Field, values: Vec<f64>) -> Result<Self, MorphError> {
        self.insert(field, values)?;
        Ok(self)
    }

    /// Adds (or replaces) a field.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::LengthMismatch`] unless `values` has 8760 entries.
    pub fn insert(&mut self, field: Field, values: Vec<f64>) -> Result<(), MorphError> {
        if values.len() != HOURS_PER_YEAR {
            return Err(MorphError::LengthMismatch {
                expected: HOURS_PER_YEAR,
                got: values.len(),
                field: field.key().to_string(),
            });
        }
        self.fields.insert(field, values);
        Ok(())
    }

    /// Site location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Years the record represents.
    pub fn baseline_range(&self) -> YearRange {
        self.baseline_range
    }

    /// Returns the field's values, if present.
    pub fn field(&self, field: Field) -> Option<&[f64]> {
        self.fields.get(&field).map(Vec::as_slice)
    }

    /// Returns the field's values.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::MissingField`] if the record lacks it.
    pub fn require(&self, field: Field) -> Result<&[f64], MorphError> {
        self.field(field).ok_or_else(|| MorphError::MissingField {
            field: field.key().to_string(),
        })
    }

    /// Iterates the fields present, in [`Field`] order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &[f64])> {
        self.fields.iter().map(|(&f, v)| (f, v.as_slice()))
    }
}
