//! Shape-preserving application of scalar formulas.
//!
//! Chart construction evaluates each relationship over hundreds of sample
//! temperatures, while state-point queries evaluate it once. Every engine
//! formula is written for a single `f64`; this module lifts it over the input
//! shapes callers actually hold.

use crate::error::{PsychroError, PsychroResult};

/// An input that a scalar formula can be mapped over.
///
/// The output has the same shape as the input: a scalar maps to a scalar, an
/// `N`-array to an `N`-array, and a slice or vector to a `Vec` of equal length.
pub trait Elementwise {
    type Output;

    fn map_each<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64;
}

impl Elementwise for f64 {
    type Output = f64;

    fn map_each<F>(self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        f(self)
    }
}

impl Elementwise for &[f64] {
    type Output = Vec<f64>;

    fn map_each<F>(self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.iter().map(|&x| f(x)).collect()
    }
}

impl Elementwise for &Vec<f64> {
    type Output = Vec<f64>;

    fn map_each<F>(self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.as_slice().map_each(f)
    }
}

impl Elementwise for Vec<f64> {
    type Output = Vec<f64>;

    fn map_each<F>(mut self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        for x in &mut self {
            *x = f(*x);
        }
        self
    }
}

impl<const N: usize> Elementwise for [f64; N] {
    type Output = [f64; N];

    fn map_each<F>(self, f: F) -> [f64; N]
    where
        F: Fn(f64) -> f64,
    {
        self.map(f)
    }
}

/// Apply a two-argument formula pairwise over equally long sequences.
pub fn zip_each<F>(a: &[f64], b: &[f64], f: F) -> PsychroResult<Vec<f64>>
where
    F: Fn(f64, f64) -> f64,
{
    if a.len() != b.len() {
        return Err(PsychroError::ShapeMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
}
