//! Temperature-humidity index (ITU / THI).

use crate::error::IndexResult;
use crate::index::{ComfortIndex, check_finite, rh_percent};

/// Inputs for [`Itu`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItuInput {
    /// Dry-bulb air temperature [°C]
    pub t: f64,
    /// Relative humidity [-], fraction in [0, 1]
    pub rh: f64,
}

/// Temperature-humidity index:
/// `ITU = T - (0.55 - 0.0055 RH%) (T - 14.5)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Itu;

impl ComfortIndex for Itu {
    const NAME: &'static str = "ITU";
    type Input = ItuInput;

    fn compute(input: &ItuInput) -> IndexResult<f64> {
        let t = check_finite(input.t, "air temperature")?;
        let rh = rh_percent(input.rh)?;
        Ok(t - (0.55 - 0.0055 * rh) * (t - 14.5))
    }
}

/// Shorthand for `Itu::compute(&ItuInput { t, rh })`.
pub fn itu(t: f64, rh: f64) -> IndexResult<f64> {
    Itu::compute(&ItuInput { t, rh })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;

    #[test]
    fn increases_with_temperature() {
        let v1 = itu(25.0, 0.5).unwrap();
        let v2 = itu(30.0, 0.5).unwrap();
        assert!(v2 > v1);
    }

    #[test]
    fn increases_with_humidity() {
        let v1 = itu(30.0, 0.4).unwrap();
        let v2 = itu(30.0, 0.7).unwrap();
        assert!(v2 > v1);
    }

    #[test]
    fn known_value() {
        // 30 - (0.55 - 0.275) * 15.5 = 25.7375
        let v = itu(30.0, 0.5).unwrap();
        assert!((v - 25.7375).abs() < 1e-9);
    }

    #[test]
    fn rejects_percent_humidity() {
        let err = itu(30.0, 50.0).unwrap_err();
        assert_eq!(err, IndexError::RelativeHumidity { value: 50.0 });
    }

    #[test]
    fn name() {
        assert_eq!(Itu::NAME, "ITU");
    }
}
