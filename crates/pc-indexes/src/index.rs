//! Common interface for comfort indexes.

use crate::error::{IndexError, IndexResult};

/// A comfort index: a named, validated function of environmental inputs.
pub trait ComfortIndex {
    /// Short display name (e.g. "ITU").
    const NAME: &'static str;

    /// Environmental inputs the index needs.
    type Input;

    /// Evaluate the index, rejecting out-of-domain inputs.
    fn compute(input: &Self::Input) -> IndexResult<f64>;
}

pub(crate) fn check_finite(value: f64, what: &'static str) -> IndexResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IndexError::NonFinite { what })
    }
}

/// Relative humidity as a percentage, after checking it is a fraction in [0, 1].
pub(crate) fn rh_percent(rh: f64) -> IndexResult<f64> {
    if !(0.0..=1.0).contains(&rh) {
        return Err(IndexError::RelativeHumidity { value: rh });
    }
    Ok(rh * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rh_percent_bounds() {
        assert_eq!(rh_percent(0.0).unwrap(), 0.0);
        assert_eq!(rh_percent(1.0).unwrap(), 100.0);
        assert!(rh_percent(1.01).is_err());
        assert!(rh_percent(-0.01).is_err());
        assert!(rh_percent(f64::NAN).is_err());
    }

    #[test]
    fn check_finite_rejects_infinity() {
        assert!(check_finite(f64::INFINITY, "T").is_err());
        assert_eq!(check_finite(2.5, "T").unwrap(), 2.5);
    }
}
