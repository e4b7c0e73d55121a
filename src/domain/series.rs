// Time series domain models
use super::error::ViewModelError;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

/// X-axis position of a point: a calendar date for monthly charts, a
/// zero-based hour or week index otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Period {
    Date(NaiveDate),
    Index(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub period: Period,
    /// One value per series, in the order of the owning `TimeSeries::series`.
    pub values: Vec<f64>,
}

impl TimeSeriesPoint {
    pub fn new(period: Period, values: Vec<f64>) -> Self {
        Self { period, values }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub series: Vec<String>,
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    pub fn new(series: Vec<String>, points: Vec<TimeSeriesPoint>) -> Self {
        debug_assert!(points.iter().all(|p| p.values.len() == series.len()));
        debug_assert!(points.windows(2).all(|w| w[0].period < w[1].period));
        Self { series, points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Values of one named series, in period order.
    #[allow(dead_code)]
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.series.iter().position(|s| s == name)?;
        Some(self.points.iter().map(|p| p.values[idx]).collect())
    }
}

/// Parameters of one normally distributed synthetic series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    name: String,
    mean: f64,
    stddev: f64,
}

impl SeriesSpec {
    pub fn new(name: impl Into<String>, mean: f64, stddev: f64) -> Result<Self, ViewModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ViewModelError::EmptySeriesName);
        }
        if !mean.is_finite() {
            return Err(ViewModelError::InvalidMean { name, mean });
        }
        if !stddev.is_finite() || stddev < 0.0 {
            return Err(ViewModelError::InvalidStdDev { name, stddev });
        }
        Ok(Self { name, mean, stddev })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }
}

/// Rejects empty and repeated series names.
pub fn validate_series_names<'a, I>(names: I) -> Result<(), ViewModelError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(ViewModelError::EmptySeriesName);
        }
        if !seen.insert(name) {
            return Err(ViewModelError::DuplicateSeries(name.to_string()));
        }
    }
    Ok(())
}
