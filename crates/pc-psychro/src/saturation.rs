//! Saturation vapor pressure over liquid water.

use crate::constants::{MAGNUS_A, MAGNUS_B, MAGNUS_C, SATURATION_SINGULARITY};
use crate::elementwise::Elementwise;
use crate::error::{PsychroError, PsychroResult};

/// Saturation vapor pressure [Pa] at dry-bulb temperature `t` [°C].
///
/// Magnus-Tetens form `610.94 * exp(17.625 t / (t + 243.04))`, strictly
/// increasing over the chart range.
///
/// No input validation: the denominator vanishes at `t = -243.04 °C`, where the
/// result is meaningless. Use [`saturation_pressure_checked`] when `t` is not
/// already known to lie well above that point.
#[inline]
pub fn saturation_pressure(t: f64) -> f64 {
    MAGNUS_C * ((MAGNUS_A * t) / (t + MAGNUS_B)).exp()
}

/// [`saturation_pressure`] over any [`Elementwise`] input, preserving its shape.
pub fn saturation_pressure_each<E: Elementwise>(t: E) -> E::Output {
    t.map_each(saturation_pressure)
}

/// [`saturation_pressure`] restricted to temperatures above the singularity.
pub fn saturation_pressure_checked(t: f64) -> PsychroResult<f64> {
    if !t.is_finite() || t <= SATURATION_SINGULARITY {
        return Err(PsychroError::OutOfRange {
            what: "dry-bulb temperature (Magnus-Tetens domain)",
            value: t,
        });
    }
    let p_sat = saturation_pressure(t);
    if !p_sat.is_finite() {
        return Err(PsychroError::OutOfRange {
            what: "saturation pressure",
            value: p_sat,
        });
    }
    Ok(p_sat)
}

/// Partial pressure of water vapor [Pa] at temperature `t` and relative humidity `rh`.
#[inline]
pub fn vapor_pressure(t: f64, rh: f64) -> f64 {
    rh * saturation_pressure(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_value_at_zero_celsius() {
        // exp(0) = 1
        assert_eq!(saturation_pressure(0.0), MAGNUS_C);
    }

    #[test]
    fn monotonic_over_sample_range() {
        let p = saturation_pressure_each([0.0, 10.0, 20.0, 30.0]);
        assert!(p.windows(2).all(|w| w[1] > w[0]), "p_sat = {p:?}");
    }

    #[test]
    fn plausible_magnitude_at_room_temperature() {
        // Tabulated ~3169 Pa at 25 °C
        let p = saturation_pressure(25.0);
        assert!((p - 3169.0).abs() / 3169.0 < 0.01, "p_sat(25) = {p}");
    }

    #[test]
    fn elementwise_matches_scalar() {
        let t = vec![-10.0, 0.0, 12.5, 40.0];
        let p = saturation_pressure_each(&t);
        assert_eq!(p.len(), t.len());
        for (ti, pi) in t.iter().zip(&p) {
            assert_eq!(*pi, saturation_pressure(*ti));
        }
    }

    #[test]
    fn checked_rejects_singularity_and_below() {
        assert!(saturation_pressure_checked(SATURATION_SINGULARITY).is_err());
        assert!(saturation_pressure_checked(-300.0).is_err());
        assert!(saturation_pressure_checked(f64::NAN).is_err());
        assert!(saturation_pressure_checked(20.0).is_ok());
    }

    #[test]
    fn plain_function_is_unguarded_near_singularity() {
        // Zero at the pole, overflow just below it, physically absurd further down.
        assert_eq!(saturation_pressure(SATURATION_SINGULARITY), 0.0);
        assert!(saturation_pressure(SATURATION_SINGULARITY - 0.01).is_infinite());
        assert!(saturation_pressure(-300.0) > 1e30);
        assert!(saturation_pressure(f64::NAN).is_nan());
    }

    #[test]
    fn vapor_pressure_scales_with_rh() {
        let full = vapor_pressure(20.0, 1.0);
        let half = vapor_pressure(20.0, 0.5);
        assert!((full - 2.0 * half).abs() < 1e-9);
    }
}
