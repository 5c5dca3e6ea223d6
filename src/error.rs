//! Error types for Fourier analysis.

use std::fmt;

use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which half of a `(time, amplitude)` pair failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleField {
    /// The sample (or evaluation) time.
    Time,
    /// The sampled amplitude.
    Amplitude,
}

impl fmt::Display for SampleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleField::Time => write!(f, "time"),
            SampleField::Amplitude => write!(f, "amplitude"),
        }
    }
}

/// Reason an input sequence was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    /// The series holds no samples.
    Empty,
    /// Time and amplitude sequences differ in length.
    LengthMismatch { times: usize, values: usize },
    /// A NaN or infinite value was found.
    NonFinite { index: usize, field: SampleField },
}

impl fmt::Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputProblem::Empty => write!(f, "sample series is empty"),
            InputProblem::LengthMismatch { times, values } => write!(
                f,
                "{} times but {} amplitudes",
                times, values
            ),
            InputProblem::NonFinite { index, field } => {
                write!(f, "non-finite {} at index {}", field, index)
            }
        }
    }
}

/// Errors produced by the transforms and their collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// Sample series or evaluation times failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(InputProblem),

    /// Cosine and sine coefficient arrays have different lengths.
    #[error("coefficient shape mismatch: {cos_len} cosine vs {sin_len} sine terms")]
    ShapeMismatch { cos_len: usize, sin_len: usize },

    /// Analysis configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A table row could not be turned into a sample.
    #[error("table line {line}: {message}")]
    Table { line: u64, message: String },

    /// Delimited-text reader error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this is an input-validation failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// Whether this is a coefficient shape failure.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Error::ShapeMismatch { .. })
    }
}

impl From<InputProblem> for Error {
    fn from(problem: InputProblem) -> Self {
        Error::InvalidInput(problem)
    }
}
