//! Monthly climate-model series and their calendar-month climatologies.

use crate::error::ClimatologyError;
use crate::set::ClimatologyPair;
use tethys_calendar::MonthKeyed;

/// An inclusive range of calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Creates a new range covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::InvalidRange`] if `start > end`.
    pub fn new(start: i32, end: i32) -> Result<Self, ClimatologyError> {
        if start > end {
            return Err(ClimatologyError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First year of the range.
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Last year of the range.
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Difference between the last and first year.
    pub fn extent(&self) -> i32 {
        self.end - self.start
    }

    /// Whether `year` lies inside the range.
    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

/// A monthly time series from a climate model, January of `start_year` first.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSeries {
    start_year: i32,
    values: Vec<f64>,
}

impl ModelSeries {
    /// Creates a series starting in January of `start_year`.
    ///
    /// Missing months are represented by NaN.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatologyError::PartialYear`] unless `values.len()` is a
    /// positive multiple of 12.
    pub fn new(start_year: i32, values: Vec<f64>) -> Result<Self, ClimatologyError> {
        if values.is_empty() || values.len() % 12 != 0 {
            return Err(ClimatologyError::PartialYear { len: values.len() });
        }
        Ok(Self { start_year, values })
    }

    /// First year covered.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Last year covered.
    pub fn end_year(&self) -> i32 {
        self.start_year + self.n_years() as i32 - 1
    }

    /// Number of whole years covered.
    pub fn n_years(&self) -> usize {
        self.values.len() / 12
    }

    /// Monthly values, January of the first year first.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value for `year` and `month` (1..=12), if the series covers it.
    pub fn get(&self, year: i32, month: u8) -> Option<f64> {
        if !(1..=12).contains(&month) || year < self.start_year || year > self.end_year() {
            return None;
        }
        let i = (year - self.start_year) as usize * 12 + (month - 1) as usize;
        Some(self.values[i])
    }

    /// Joins `self` with a series that continues it (historical run followed
    /// by a scenario run). Years covered by neither are NaN; where both cover
    /// a month with a finite value, `later` wins.
    pub fn concat(&self, later: &ModelSeries) -> ModelSeries {
        let start = self.start_year.min(later.start_year);
        let end = self.end_year().max(later.end_year());
        let n_years = (end - start + 1) as usize;
        let mut values = vec![f64::NAN; n_years * 12];

        for series in [self, later] {
            let offset = (series.start_year - start) as usize * 12;
            for (i, &v) in series.values.iter().enumerate() {
                if v.is_finite() {
                    values[offset + i] = v;
                }
            }
        }
        ModelSeries {
            start_year: start,
            values,
        }
    }
}

/// Mean of each calendar month over the years of `range`.
///
/// Non-finite values are skipped.
///
/// # Errors
///
/// Returns [`ClimatologyError::EmptyRange`] for the first month with no
/// finite value inside the range.
pub fn climatology(series: &ModelSeries, range: YearRange) -> Result<MonthKeyed, ClimatologyError> {
    let mut means = [0.0; 12];
    for (i, mean) in means.iter_mut().enumerate() {
        let month = i as u8 + 1;
        let values: Vec<f64> = (range.start()..=range.end())
            .filter_map(|year| series.get(year, month))
            .filter(|v| v.is_finite())
            .collect();
        if values.is_empty() {
            return Err(ClimatologyError::EmptyRange {
                month,
                start: range.start(),
                end: range.end(),
            });
        }
        *mean = tethys_stats::mean(&values);
    }
    Ok(MonthKeyed::from_array(means))
}

/// Baseline and future climatologies of one model variable.
///
/// The historical and scenario series are joined first, so a baseline range
/// that reaches into the scenario period draws on both.
///
/// # Errors
///
/// Propagates [`ClimatologyError::EmptyRange`] from either window.
pub fn climatology_pair(
    historical: &ModelSeries,
    scenario: &ModelSeries,
    baseline_range: YearRange,
    future_range: YearRange,
) -> Result<ClimatologyPair, ClimatologyError> {
    let full = historical.concat(scenario);
    let baseline = climatology(&full, baseline_range)?;
    let future = climatology(&full, future_range)?;
    Ok(ClimatologyPair::new(baseline, future))
}
