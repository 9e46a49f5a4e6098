//! Errors raised while building or loading projection weights

use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration problems detected once, before any projection runs
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required constant was absent from the weights file
    #[error("missing weight constant: {0}")]
    MissingConstant(String),

    /// The weights file defined the same constant twice
    #[error("duplicate weight constant: {0}")]
    DuplicateConstant(String),

    /// The weights file named a constant this model does not know
    #[error("unknown weight constant: {0}")]
    UnknownConstant(String),

    /// A cap used as a normalization divisor must be strictly positive
    #[error("{name} must be positive, got {value}")]
    NonPositiveCap { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("multiplier floor {floor} exceeds ceiling {ceiling}")]
    InvertedBounds { floor: f64, ceiling: f64 },

    /// Wind thresholds must be strictly ascending
    #[error("wind schedule threshold {threshold} at row {index} does not exceed {previous}")]
    UnorderedWindSchedule {
        index: usize,
        previous: f64,
        threshold: f64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
