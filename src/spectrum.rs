//! Power spectrum of a coefficient set.
//!
//! Each term's magnitude is the Euclidean norm of its `(a_k, b_k)` pair,
//! which discards phase.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::slice_maybe_parallel;
use crate::transform::CoefficientSet;
#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};

/// Magnitude per frequency term, same length as the coefficient set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerSpectrum {
    /// `sqrt(a_k² + b_k²)` for each term `k`
    pub magnitudes: Vec<f64>,
}

impl PowerSpectrum {
    #[inline]
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Magnitude at term `k`.
    pub fn get(&self, k: usize) -> Option<f64> {
        self.magnitudes.get(k).copied()
    }

    /// Term with the largest magnitude. With `include_dc == false` the
    /// zero-frequency term is skipped. Ties resolve to the lowest term.
    pub fn dominant_term(&self, include_dc: bool) -> Option<usize> {
        let start = if include_dc { 0 } else { 1 };
        let mut best: Option<(usize, f64)> = None;
        for (k, &m) in self.magnitudes.iter().enumerate().skip(start) {
            match best {
                Some((_, best_m)) if m <= best_m => {}
                _ => best = Some((k, m)),
            }
        }
        best.map(|(k, _)| k)
    }

    /// Index of the highest term with non-zero magnitude.
    pub fn highest_nonzero_term(&self) -> Option<usize> {
        self.magnitudes.iter().rposition(|&m| m != 0.0)
    }
}

/// Compute the power spectrum of a coefficient set.
///
/// # Errors
/// `ShapeMismatch` if the cosine and sine arrays differ in length.
pub fn power_spectrum(coeffs: &CoefficientSet) -> Result<PowerSpectrum> {
    let n_terms = coeffs.check_shape()?;
    tracing::debug!(num_terms = n_terms, "power spectrum");

    let magnitudes = slice_maybe_parallel!(coeffs.cos_coeffs)
        .zip(slice_maybe_parallel!(coeffs.sin_coeffs))
        .map(|(&a, &b)| a.hypot(b))
        .collect();

    Ok(PowerSpectrum { magnitudes })
}
