// Errors raised while constructing view-models from caller-supplied settings
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewModelError {
    #[error("series name must not be empty")]
    EmptySeriesName,

    #[error("series '{0}' is listed more than once")]
    DuplicateSeries(String),

    #[error("series '{name}' has a non-finite mean ({mean})")]
    InvalidMean { name: String, mean: f64 },

    #[error("series '{name}' has an invalid standard deviation ({stddev}), expected a finite value >= 0")]
    InvalidStdDev { name: String, stddev: f64 },
}
