//! Isoline generators for chart families that need more than one formula.

use crate::constants::{CP_DRY_AIR, H_FG};
use crate::dew_point::{DewPointOptions, dew_point_batch};
use crate::elementwise::Elementwise;
use crate::moist_air::saturation_humidity_ratio;

/// Humidity ratio along the constant wet-bulb line `t_wb`, evaluated at dry-bulb `t_db`.
///
/// Linear approximation `W_sat(t_wb) - cp (t_db - t_wb) / Hfg`; true wet-bulb
/// lines curve slightly. For `t_db < t_wb` the line rises above saturation,
/// and callers must drop every point where the result is `>= W_sat(t_db)`:
/// those states do not exist.
#[inline]
pub fn wet_bulb_line(t_db: f64, t_wb: f64, p: f64) -> f64 {
    saturation_humidity_ratio(t_wb, p) - CP_DRY_AIR * (t_db - t_wb) / H_FG
}

/// [`wet_bulb_line`] over any [`Elementwise`] dry-bulb input.
pub fn wet_bulb_line_each<E: Elementwise>(t_db: E, t_wb: f64, p: f64) -> E::Output {
    t_db.map_each(|t| wet_bulb_line(t, t_wb, p))
}

/// Dew-point temperatures along a dry-bulb sweep at fixed relative humidity.
///
/// Solved as one batch with default solver options.
pub fn dew_point_line(t_db: &[f64], rh: f64, p: f64) -> Vec<f64> {
    dew_point_batch(rh, t_db, p, &DewPointOptions::default()).values
}
