//! Error types for comfort index evaluation.

use thiserror::Error;

/// Result type for comfort index evaluation.
pub type IndexResult<T> = Result<T, IndexError>;

/// Input validation failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndexError {
    /// Relative humidity must be a fraction between 0 and 1.
    #[error("Relative humidity (RH) must be given as a fraction between 0 and 1, got {value}")]
    RelativeHumidity { value: f64 },

    /// Wind speed must be non-negative.
    #[error("Wind speed (WS) must be non-negative, got {value}")]
    NegativeWindSpeed { value: f64 },

    /// Solar radiation must be non-negative.
    #[error("Solar radiation (SR) must be non-negative, got {value}")]
    NegativeSolarRadiation { value: f64 },

    /// Input is NaN or infinite.
    #[error("Non-finite input for {what}")]
    NonFinite { what: &'static str },
}
