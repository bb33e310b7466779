//! Heat load index (HLI) for cattle.

use crate::error::{IndexError, IndexResult};
use crate::index::{ComfortIndex, check_finite, rh_percent};

/// Inputs for [`Hli`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HliInput {
    /// Dry-bulb air temperature [°C]
    pub t: f64,
    /// Relative humidity [-], fraction in [0, 1]
    pub rh: f64,
    /// Solar radiation [W/m²]
    pub sr: f64,
    /// Wind speed [m/s]
    pub ws: f64,
}

/// Heat load index:
/// `HLI = 8.62 + 0.38 RH% + 1.55 T - 0.5 WS + 0.02 SR`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hli;

impl ComfortIndex for Hli {
    const NAME: &'static str = "HLI";
    type Input = HliInput;

    fn compute(input: &HliInput) -> IndexResult<f64> {
        let t = check_finite(input.t, "air temperature")?;
        let rh = rh_percent(input.rh)?;
        let ws = check_finite(input.ws, "wind speed")?;
        let sr = check_finite(input.sr, "solar radiation")?;
        if ws < 0.0 {
            return Err(IndexError::NegativeWindSpeed { value: ws });
        }
        if sr < 0.0 {
            return Err(IndexError::NegativeSolarRadiation { value: sr });
        }
        Ok(8.62 + 0.38 * rh + 1.55 * t - 0.5 * ws + 0.02 * sr)
    }
}

/// Shorthand for `Hli::compute(&HliInput { t, rh, sr, ws })`.
pub fn hli(t: f64, rh: f64, sr: f64, ws: f64) -> IndexResult<f64> {
    Hli::compute(&HliInput { t, rh, sr, ws })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increases_with_temperature() {
        let v1 = hli(25.0, 0.5, 600.0, 2.0).unwrap();
        let v2 = hli(35.0, 0.5, 600.0, 2.0).unwrap();
        assert!(v2 > v1);
    }

    #[test]
    fn decreases_with_wind() {
        let v1 = hli(35.0, 0.6, 700.0, 1.0).unwrap();
        let v2 = hli(35.0, 0.6, 700.0, 4.0).unwrap();
        assert!(v2 < v1);
    }

    #[test]
    fn increases_with_radiation() {
        let v1 = hli(30.0, 0.5, 300.0, 2.0).unwrap();
        let v2 = hli(30.0, 0.5, 800.0, 2.0).unwrap();
        assert!(v2 > v1);
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert!(matches!(
            hli(30.0, 0.5, 300.0, -1.0),
            Err(IndexError::NegativeWindSpeed { .. })
        ));
        assert!(matches!(
            hli(30.0, 0.5, -10.0, 1.0),
            Err(IndexError::NegativeSolarRadiation { .. })
        ));
        assert!(matches!(
            hli(30.0, 1.5, 300.0, 1.0),
            Err(IndexError::RelativeHumidity { .. })
        ));
        assert!(matches!(
            hli(f64::NAN, 0.5, 300.0, 1.0),
            Err(IndexError::NonFinite { .. })
        ));
    }
}
