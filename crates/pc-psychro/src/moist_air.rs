//! Algebraic moist-air relationships (no iteration).
//!
//! Every function here is a closed-form expression; the inverses used to draw
//! constant-enthalpy and constant-volume isolines live next to their forward
//! formulas so no caller has to rearrange them by hand.

use crate::constants::{
    CP_DRY_AIR, CP_VAPOR, H_FG, KELVIN_OFFSET, MASS_RATIO, R_DRY_AIR, VOLUME_CORRECTION,
};
use crate::elementwise::{Elementwise, zip_each};
use crate::error::{PsychroError, PsychroResult};
use crate::saturation::saturation_pressure;

/// Humidity ratio W [kg/kg dry air] at temperature `t` [°C], relative
/// humidity `rh` [-] and total pressure `p` [Pa].
///
/// `W = 0.622 * rh*p_sat / (p - rh*p_sat)`. The caller must keep `rh` in
/// [0, 1]. As `rh * p_sat` approaches `p` the result diverges, and beyond it
/// turns negative; see [`humidity_ratio_checked`].
#[inline]
pub fn humidity_ratio(t: f64, rh: f64, p: f64) -> f64 {
    let p_v = rh * saturation_pressure(t);
    MASS_RATIO * p_v / (p - p_v)
}

/// [`humidity_ratio`] at fixed `rh` and `p` over any [`Elementwise`] temperature input.
pub fn humidity_ratio_each<E: Elementwise>(t: E, rh: f64, p: f64) -> E::Output {
    t.map_each(|t| humidity_ratio(t, rh, p))
}

/// [`humidity_ratio`] for paired temperature / relative humidity sequences.
pub fn humidity_ratio_pairs(t: &[f64], rh: &[f64], p: f64) -> PsychroResult<Vec<f64>> {
    zip_each(t, rh, |t, rh| humidity_ratio(t, rh, p))
}

/// [`humidity_ratio`] that refuses states where the vapor would carry the
/// whole pressure, or the result is not a finite non-negative number.
pub fn humidity_ratio_checked(t: f64, rh: f64, p: f64) -> PsychroResult<f64> {
    let p_v = rh * saturation_pressure(t);
    if !p_v.is_finite() || p_v >= p {
        return Err(PsychroError::NonPhysical {
            what: "vapor pressure must stay below total pressure",
        });
    }
    let w = MASS_RATIO * p_v / (p - p_v);
    if !w.is_finite() || w < 0.0 {
        return Err(PsychroError::NonPhysical {
            what: "humidity ratio must be finite and non-negative",
        });
    }
    Ok(w)
}

/// Humidity ratio on the saturation curve (RH = 1), the upper bound of the chart.
#[inline]
pub fn saturation_humidity_ratio(t: f64, p: f64) -> f64 {
    humidity_ratio(t, 1.0, p)
}

/// Specific enthalpy of moist air [kJ/kg dry air].
#[inline]
pub fn enthalpy(t: f64, w: f64) -> f64 {
    CP_DRY_AIR * t + w * (H_FG + CP_VAPOR * t)
}

/// [`enthalpy`] at fixed `w` over any [`Elementwise`] temperature input.
pub fn enthalpy_each<E: Elementwise>(t: E, w: f64) -> E::Output {
    t.map_each(|t| enthalpy(t, w))
}

/// Humidity ratio on the constant-enthalpy line `h` at temperature `t`.
#[inline]
pub fn humidity_ratio_from_enthalpy(t: f64, h: f64) -> f64 {
    (h - CP_DRY_AIR * t) / vapor_enthalpy(t)
}

/// Relative humidity [-] from humidity ratio; exact inverse of [`humidity_ratio`].
#[inline]
pub fn relative_humidity_from_w(t: f64, w: f64, p: f64) -> f64 {
    let p_v = w * p / (MASS_RATIO + w);
    p_v / saturation_pressure(t)
}

/// Specific humidity [kg vapor/kg moist air].
#[inline]
pub fn specific_humidity(w: f64) -> f64 {
    w / (1.0 + w)
}

/// Specific volume [m³/kg dry air].
#[inline]
pub fn specific_volume(t: f64, w: f64, p: f64) -> f64 {
    R_DRY_AIR * (t + KELVIN_OFFSET) * (1.0 + VOLUME_CORRECTION * w) / p
}

/// Humidity ratio on the constant-specific-volume line `v` at temperature `t`.
#[inline]
pub fn humidity_ratio_from_specific_volume(t: f64, v: f64, p: f64) -> f64 {
    (v * p / (R_DRY_AIR * (t + KELVIN_OFFSET)) - 1.0) / VOLUME_CORRECTION
}

/// Density of moist air [kg/m³], the reciprocal of [`specific_volume`].
#[inline]
pub fn density(t: f64, w: f64, p: f64) -> f64 {
    1.0 / specific_volume(t, w, p)
}

/// Specific enthalpy of water vapor [kJ/kg].
#[inline]
pub fn vapor_enthalpy(t: f64) -> f64 {
    H_FG + CP_VAPOR * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STANDARD_PRESSURE;

    const P: f64 = STANDARD_PRESSURE;

    #[test]
    fn humidity_ratio_increases_with_rh() {
        let w1 = humidity_ratio(25.0, 0.3, P);
        let w2 = humidity_ratio(25.0, 0.6, P);
        assert!(w2 > w1);
    }

    #[test]
    fn humidity_ratio_increases_with_temperature() {
        let w = humidity_ratio_each([0.0, 10.0, 20.0, 30.0], 0.5, P);
        assert!(w.windows(2).all(|pair| pair[1] > pair[0]), "W = {w:?}");
    }

    #[test]
    fn dry_air_has_zero_humidity_ratio() {
        assert_eq!(humidity_ratio(30.0, 0.0, P), 0.0);
    }

    #[test]
    fn pairs_match_scalar_and_check_shape() {
        let t = [10.0, 20.0, 30.0];
        let rh = [0.2, 0.5, 0.8];
        let w = humidity_ratio_pairs(&t, &rh, P).unwrap();
        for i in 0..3 {
            assert_eq!(w[i], humidity_ratio(t[i], rh[i], P));
        }
        assert!(humidity_ratio_pairs(&t, &rh[..2], P).is_err());
    }

    #[test]
    fn checked_rejects_supersaturated_pressure() {
        // p_sat(100 °C) ~ 1e5 Pa, so at half an atmosphere the vapor exceeds P.
        assert!(humidity_ratio_checked(100.0, 1.0, 50_000.0).is_err());
        assert!(humidity_ratio_checked(20.0, 0.5, P).is_ok());
    }

    #[test]
    fn unchecked_degenerates_beyond_total_pressure() {
        let w = humidity_ratio(100.0, 1.0, 50_000.0);
        assert!(w < 0.0 || !w.is_finite());
    }

    #[test]
    fn enthalpy_increases_with_temperature() {
        let h = enthalpy_each([20.0, 30.0], 0.01);
        assert!(h[1] > h[0]);
    }

    #[test]
    fn enthalpy_inverse() {
        let w = 0.012;
        let h = enthalpy(24.0, w);
        assert!((humidity_ratio_from_enthalpy(24.0, h) - w).abs() < 1e-12);
    }

    #[test]
    fn relative_humidity_inverse() {
        let w = humidity_ratio(25.0, 0.5, P);
        let rh = relative_humidity_from_w(25.0, w, P);
        assert!((rh - 0.5).abs() < 1e-3);
    }

    #[test]
    fn specific_volume_positive_and_density_reciprocal() {
        let v = specific_volume(25.0, 0.01, P);
        assert!(v > 0.0);
        assert!((density(25.0, 0.01, P) * v - 1.0).abs() < 1e-12);
        // Moist air near room temperature sits around 0.85-0.87 m³/kg
        assert!(v > 0.8 && v < 0.9, "v = {v}");
    }

    #[test]
    fn specific_volume_inverse() {
        let v = specific_volume(18.0, 0.008, P);
        let w = humidity_ratio_from_specific_volume(18.0, v, P);
        assert!((w - 0.008).abs() < 1e-12);
    }

    #[test]
    fn specific_humidity_below_humidity_ratio() {
        let w = 0.015;
        let q = specific_humidity(w);
        assert!(q < w && q > 0.0);
    }

    #[test]
    fn vapor_enthalpy_at_zero_is_latent_heat() {
        assert_eq!(vapor_enthalpy(0.0), H_FG);
    }
}
