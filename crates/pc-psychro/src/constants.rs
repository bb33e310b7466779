//! Physical constants for moist air.
//!
//! Values are fixed; every chart and index built on top of this crate relies
//! on them matching the reference formulation exactly.

use pc_core::units::constants::{CELSIUS_TO_KELVIN, STANDARD_PRESSURE_PA};

/// Specific heat of dry air at constant pressure [kJ/(kg·°C)].
pub const CP_DRY_AIR: f64 = 1.006;

/// Latent heat of vaporization of water at 0 °C [kJ/kg].
pub const H_FG: f64 = 2501.0;

/// Gas constant for dry air [J/(kg·K)].
pub const R_DRY_AIR: f64 = 287.055;

/// Specific heat of water vapor at constant pressure [kJ/(kg·°C)].
pub const CP_VAPOR: f64 = 1.86;

/// Magnus-Tetens reference pressure [Pa].
pub const MAGNUS_C: f64 = 610.94;

/// Magnus-Tetens exponent coefficient [-].
pub const MAGNUS_A: f64 = 17.625;

/// Magnus-Tetens temperature offset [°C].
pub const MAGNUS_B: f64 = 243.04;

/// Temperature at which the Magnus-Tetens denominator vanishes [°C].
pub const SATURATION_SINGULARITY: f64 = -MAGNUS_B;

/// Ratio of molar masses, water vapor over dry air [-].
pub const MASS_RATIO: f64 = 0.622;

/// Moist-air correction factor in the specific-volume formula [-].
pub const VOLUME_CORRECTION: f64 = 1.6078;

/// Standard atmospheric pressure [Pa], the default for every call site.
pub const STANDARD_PRESSURE: f64 = STANDARD_PRESSURE_PA;

/// Celsius to Kelvin offset [K].
pub const KELVIN_OFFSET: f64 = CELSIUS_TO_KELVIN;
