//! pc-psychro: moist-air psychrometric relationships for psychroflow.
//!
//! Provides:
//! - Physical constants shared by every formula
//! - Saturation vapor pressure (Magnus-Tetens)
//! - Humidity ratio, enthalpy, specific volume, density and their inverses
//! - Dew-point temperature via batched Newton-Raphson
//! - Isoline generators (wet-bulb, dew-point lines)
//! - `AirState`: every property of a single state point in one call
//!
//! # Conventions
//!
//! Temperatures are in °C, pressures in Pa, relative humidity is a fraction in
//! [0, 1] and humidity ratios are kg vapor per kg dry air. Every function is
//! scalar and pure; the `Elementwise` trait applies any of them over a
//! sequence while preserving its shape.
//!
//! Range checks are the caller's job. The plain functions mirror the reference
//! formulas exactly and may return non-finite or unphysical values outside the
//! valid domain; the `*_checked` variants and `AirState` report those cases as
//! `PsychroError`s instead.
//!
//! # Example
//!
//! ```
//! use pc_psychro::{humidity_ratio, relative_humidity_from_w, STANDARD_PRESSURE};
//!
//! let w = humidity_ratio(25.0, 0.5, STANDARD_PRESSURE);
//! let rh = relative_humidity_from_w(25.0, w, STANDARD_PRESSURE);
//! assert!((rh - 0.5).abs() < 1e-9);
//! ```

pub mod constants;
pub mod dew_point;
pub mod elementwise;
pub mod error;
pub mod lines;
pub mod moist_air;
pub mod saturation;
pub mod state;

// Re-exports for ergonomics
pub use constants::*;
pub use dew_point::{
    DewPointOptions, DewPointSolution, dew_point_batch, dew_point_batch_pairs,
    dew_point_temperature, dew_point_temperature_with,
};
pub use elementwise::{Elementwise, zip_each};
pub use error::{PsychroError, PsychroResult};
pub use lines::{dew_point_line, wet_bulb_line, wet_bulb_line_each};
pub use moist_air::*;
pub use saturation::{
    saturation_pressure, saturation_pressure_checked, saturation_pressure_each, vapor_pressure,
};
pub use state::AirState;
