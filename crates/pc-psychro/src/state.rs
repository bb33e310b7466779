//! Complete moist-air state point.

use crate::constants::SATURATION_SINGULARITY;
use crate::dew_point::{DewPointOptions, dew_point_temperature_with};
use crate::error::{PsychroError, PsychroResult};
use crate::moist_air::{
    enthalpy, humidity_ratio_checked, relative_humidity_from_w, specific_humidity,
    specific_volume,
};
use crate::saturation::saturation_pressure_checked;
use pc_core::units::{
    Density, Pressure, Ratio, SpecVolume, Temperature, as_degc, as_fraction, as_pa, kg_per_m3,
    m3_per_kg,
};

/// All psychrometric properties of one (T, RH, P) state.
///
/// Computed once by the constructors and kept as plain `f64` fields in chart
/// units (°C, Pa, kg/kg, kJ/kg, m³/kg).
#[derive(Clone, Debug, PartialEq)]
pub struct AirState {
    /// Dry-bulb temperature [°C]
    pub t: f64,
    /// Relative humidity [-]
    pub rh: f64,
    /// Total pressure [Pa]
    pub p: f64,
    /// Saturation vapor pressure at `t` [Pa]
    pub p_sat: f64,
    /// Vapor partial pressure [Pa]
    pub p_v: f64,
    /// Humidity ratio [kg/kg dry air]
    pub w: f64,
    /// Specific humidity [kg/kg moist air]
    pub q: f64,
    /// Specific enthalpy [kJ/kg dry air]
    pub h: f64,
    /// Specific volume [m³/kg dry air]
    pub v: f64,
    /// Density [kg/m³]
    pub rho: f64,
    /// Dew-point temperature [°C]; `None` for perfectly dry air
    pub t_dp: Option<f64>,
    /// Whether the dew-point iteration met its tolerance
    pub dew_point_converged: bool,
}

impl AirState {
    /// Build a state from dry-bulb temperature [°C], relative humidity [-] and pressure [Pa].
    ///
    /// Validates that `t` lies above the Magnus-Tetens singularity, `rh` in
    /// [0, 1] and `p` positive, all finite.
    pub fn from_t_rh(t: f64, rh: f64, p: f64) -> PsychroResult<Self> {
        validate_inputs(t, rh, p)?;

        let p_sat = saturation_pressure_checked(t)?;
        let p_v = rh * p_sat;
        let w = humidity_ratio_checked(t, rh, p)?;
        let v = specific_volume(t, w, p);

        let (t_dp, dew_point_converged) = if p_v > 0.0 {
            let sol = dew_point_temperature_with(rh, t, &DewPointOptions::default());
            (Some(sol.values[0]), sol.converged)
        } else {
            (None, true)
        };

        Ok(Self {
            t,
            rh,
            p,
            p_sat,
            p_v,
            w,
            q: specific_humidity(w),
            h: enthalpy(t, w),
            v,
            rho: 1.0 / v,
            t_dp,
            dew_point_converged,
        })
    }

    /// Build a state from dry-bulb temperature [°C], humidity ratio and pressure [Pa].
    pub fn from_t_w(t: f64, w: f64, p: f64) -> PsychroResult<Self> {
        if !w.is_finite() || w < 0.0 {
            return Err(PsychroError::OutOfRange {
                what: "humidity ratio",
                value: w,
            });
        }
        if !p.is_finite() || p <= 0.0 {
            return Err(PsychroError::OutOfRange {
                what: "total pressure",
                value: p,
            });
        }
        Self::from_t_rh(t, relative_humidity_from_w(t, w, p), p)
    }

    /// Build a state from unit-checked quantities.
    pub fn from_quantities(t: Temperature, rh: Ratio, p: Pressure) -> PsychroResult<Self> {
        Self::from_t_rh(as_degc(t), as_fraction(rh), as_pa(p))
    }

    /// Density as a unit-checked quantity.
    pub fn density(&self) -> Density {
        kg_per_m3(self.rho)
    }

    /// Specific volume as a unit-checked quantity.
    pub fn specific_volume(&self) -> SpecVolume {
        m3_per_kg(self.v)
    }

    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        let t_dp = self
            .t_dp
            .map(|t| format!("{t:.2}°C"))
            .unwrap_or_else(|| "n/a".to_string());
        format!(
            "State(T={:.2}°C,RH={:.1}%,P={:.0}Pa,W={:.5}kg/kg,h={:.2}kJ/kg,v={:.4}m³/kg,ρ={:.4}kg/m³,Tdp={})",
            self.t,
            self.rh * 100.0,
            self.p,
            self.w,
            self.h,
            self.v,
            self.rho,
            t_dp
        )
    }
}

fn validate_inputs(t: f64, rh: f64, p: f64) -> PsychroResult<()> {
    if !t.is_finite() || t <= SATURATION_SINGULARITY {
        return Err(PsychroError::OutOfRange {
            what: "dry-bulb temperature",
            value: t,
        });
    }
    if !rh.is_finite() || !(0.0..=1.0).contains(&rh) {
        return Err(PsychroError::OutOfRange {
            what: "relative humidity (fraction in [0, 1])",
            value: rh,
        });
    }
    if !p.is_finite() || p <= 0.0 {
        return Err(PsychroError::OutOfRange {
            what: "total pressure",
            value: p,
        });
    }
    Ok(())
}
