//! Psychrometric engine errors.

use thiserror::Error;

/// Result type for psychrometric operations.
pub type PsychroResult<T> = Result<T, PsychroError>;

/// Errors reported by the checked engine entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PsychroError {
    /// Physically impossible state (e.g. vapor pressure above total pressure).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Input outside the domain a formula supports.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Two sequences that must be evaluated pairwise differ in length.
    #[error("Shape mismatch: {left} elements vs {right} elements")]
    ShapeMismatch { left: usize, right: usize },

    /// Iterative solve did not reach its tolerance.
    #[error("Convergence failed for {what} after {iterations} iterations")]
    ConvergenceFailed {
        what: &'static str,
        iterations: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PsychroError::NonPhysical {
            what: "vapor pressure",
        };
        assert!(err.to_string().contains("vapor pressure"));

        let err = PsychroError::ShapeMismatch { left: 3, right: 4 };
        assert!(err.to_string().contains("3"));
    }
}
