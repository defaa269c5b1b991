use thiserror::Error;

/// An interface for error handling in float-range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// Error when a number format specifier is not recognized.
    #[error("Invalid number format: {0:?}")]
    InvalidNumberFormat(String),
    /// Error when the precision of a number format is not in 0..=99.
    #[error("Invalid precision: {0:?}")]
    InvalidPrecision(String),
    /// Error when a string is not of the form `[a, b]`.
    #[error("Cannot parse range from {0:?}")]
    Parse(String),
    #[allow(missing_docs)]
    #[error("{0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}
