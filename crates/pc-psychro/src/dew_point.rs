//! Dew-point temperature by Newton-Raphson on the saturation-pressure curve.
//!
//! The dew point `T_dp` of air at `(t, rh)` is the root of
//! `f(T_dp) = p_sat(T_dp) - rh * p_sat(t)`. The derivative of the
//! Magnus-Tetens curve is available in closed form, so each Newton step is
//! exact and cheap.
//!
//! Batches share a single convergence predicate: iteration continues until
//! every element has moved by at most `tol` in the same step. A slow element
//! therefore keeps the whole batch iterating, and fast elements keep refining
//! in the meantime.
//!
//! Running out of iterations is not an error here. The last estimate is
//! returned, a warning is logged and [`DewPointSolution::converged`] is false;
//! callers that need a hard guarantee use
//! [`DewPointSolution::require_converged`].

use crate::constants::{MAGNUS_A, MAGNUS_B};
use crate::error::{PsychroError, PsychroResult};
use crate::saturation::saturation_pressure;

/// Solver settings for the dew-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DewPointOptions {
    /// Absolute step tolerance [°C]
    pub tol: f64,
    /// Maximum number of Newton steps
    pub max_iter: usize,
}

impl Default for DewPointOptions {
    fn default() -> Self {
        Self {
            tol: 0.01,
            max_iter: 100,
        }
    }
}

/// Outcome of a (batched) dew-point solve.
#[derive(Debug, Clone, PartialEq)]
pub struct DewPointSolution {
    /// Dew-point temperatures [°C], one per input element
    pub values: Vec<f64>,
    /// Newton steps taken by the batch
    pub iterations: usize,
    /// Whether every element met the tolerance
    pub converged: bool,
}

impl DewPointSolution {
    /// Turn silent non-convergence into an error.
    pub fn require_converged(self) -> PsychroResult<Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(PsychroError::ConvergenceFailed {
                what: "dew-point temperature",
                iterations: self.iterations,
            })
        }
    }
}

/// Dew-point temperature [°C] of air at `t` [°C] and relative humidity `rh`.
///
/// Uses the default tolerance (0.01 °C) and iteration cap (100). The total
/// pressure `_p` does not enter the ideal-mixture dew point; it is accepted so
/// call sites read like the rest of the engine.
pub fn dew_point_temperature(rh: f64, t: f64, _p: f64) -> f64 {
    dew_point_temperature_with(rh, t, &DewPointOptions::default()).values[0]
}

/// Scalar dew point with explicit solver options, keeping the iteration report.
pub fn dew_point_temperature_with(rh: f64, t: f64, opts: &DewPointOptions) -> DewPointSolution {
    newton_batch(&[rh * saturation_pressure(t)], &[t], opts)
}

/// Dew points for a batch of temperatures at one relative humidity.
pub fn dew_point_batch(rh: f64, t: &[f64], _p: f64, opts: &DewPointOptions) -> DewPointSolution {
    let p_v: Vec<f64> = t.iter().map(|&t| rh * saturation_pressure(t)).collect();
    newton_batch(&p_v, t, opts)
}

/// Dew points for paired relative humidity / temperature sequences.
pub fn dew_point_batch_pairs(
    rh: &[f64],
    t: &[f64],
    _p: f64,
    opts: &DewPointOptions,
) -> PsychroResult<DewPointSolution> {
    if rh.len() != t.len() {
        return Err(PsychroError::ShapeMismatch {
            left: rh.len(),
            right: t.len(),
        });
    }
    let p_v: Vec<f64> = rh
        .iter()
        .zip(t)
        .map(|(&rh, &t)| rh * saturation_pressure(t))
        .collect();
    Ok(newton_batch(&p_v, t, opts))
}

/// One Newton step towards `p_sat(x) = p_v`.
#[inline]
fn newton_step(x: f64, p_v: f64) -> f64 {
    let p_sat = saturation_pressure(x);
    let residual = p_sat - p_v;
    let slope = p_sat * MAGNUS_A * MAGNUS_B / ((x + MAGNUS_B) * (x + MAGNUS_B));
    x - residual / slope
}

/// Iterate all elements together from the initial guess `guess` (the dry-bulb
/// temperatures). On convergence the estimate that passed the step test is
/// returned, not the extra step computed for the test.
fn newton_batch(p_v: &[f64], guess: &[f64], opts: &DewPointOptions) -> DewPointSolution {
    debug_assert_eq!(p_v.len(), guess.len());

    let mut t_dp = guess.to_vec();
    if t_dp.is_empty() {
        return DewPointSolution {
            values: t_dp,
            iterations: 0,
            converged: true,
        };
    }

    let mut iterations = 0;
    let mut converged = false;
    for _ in 0..opts.max_iter {
        iterations += 1;
        let next: Vec<f64> = t_dp
            .iter()
            .zip(p_v)
            .map(|(&x, &p_v)| newton_step(x, p_v))
            .collect();

        if next
            .iter()
            .zip(&t_dp)
            .all(|(a, b)| (a - b).abs() <= opts.tol)
        {
            converged = true;
            break;
        }
        t_dp = next;
    }

    if converged {
        tracing::debug!(iterations, n = t_dp.len(), "dew-point batch converged");
    } else {
        tracing::warn!(
            iterations,
            n = t_dp.len(),
            tol = opts.tol,
            "dew-point batch did not converge; returning last estimate"
        );
    }

    DewPointSolution {
        values: t_dp,
        iterations,
        converged,
    }
}
