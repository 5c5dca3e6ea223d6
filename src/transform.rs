//! Direct-summation Fourier series transforms.
//!
//! The forward transform estimates one cosine and one sine amplitude per
//! integer frequency term `k`:
//!
//! ```text
//! a_k = (2/N) Σ_i cos(k·t_i)·y_i
//! b_k = (2/N) Σ_i sin(k·t_i)·y_i
//! ```
//!
//! for `k = 0 .. floor(N/2)`, with `a_0` and `b_0` halved afterwards so that
//! `a_0` is the mean level. The inverse transform evaluates the truncated
//! series at arbitrary times:
//!
//! ```text
//! y(t) = Σ_k a_k·cos(k·t) + b_k·sin(k·t)
//! ```
//!
//! Both are deliberately O(N²) nested sums; no FFT is involved. Frequencies
//! are the literal integers `k` in the angular units of the sample times, so
//! reconstruction at the sample points is only exact when the samples cover
//! one period `[0, 2π)` on a uniform grid and the signal has no content at or
//! above the Nyquist term.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::{Error, Result, SampleField};
use crate::iter_maybe_parallel;
use crate::series::{check_finite, SampleSeries};
#[cfg(feature = "parallel")]
use rayon::iter::ParallelIterator;

/// Tolerance used when deciding whether sample times form a uniform
/// one-period grid (diagnostic only).
const UNIFORM_GRID_TOL: f64 = 1e-9;

/// Number of frequency terms estimated from `n` samples (Nyquist limit).
#[inline]
pub fn num_terms(n: usize) -> usize {
    n / 2
}

/// Cosine and sine coefficients indexed by frequency term.
///
/// Element `k` of each vector is the amplitude at angular frequency `k`.
/// The two vectors must have equal length; [`CoefficientSet::new`] checks
/// this, and the consuming transforms check it again since the fields are
/// public.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSet {
    /// Cosine amplitudes `a_k`
    pub cos_coeffs: Vec<f64>,
    /// Sine amplitudes `b_k`
    pub sin_coeffs: Vec<f64>,
}

impl CoefficientSet {
    /// Create from cosine and sine arrays of equal length.
    pub fn new(cos_coeffs: Vec<f64>, sin_coeffs: Vec<f64>) -> Result<Self> {
        let set = Self {
            cos_coeffs,
            sin_coeffs,
        };
        set.check_shape()?;
        Ok(set)
    }

    /// Number of frequency terms, or `ShapeMismatch` if the arrays disagree.
    pub fn check_shape(&self) -> Result<usize> {
        if self.cos_coeffs.len() != self.sin_coeffs.len() {
            return Err(Error::ShapeMismatch {
                cos_len: self.cos_coeffs.len(),
                sin_len: self.sin_coeffs.len(),
            });
        }
        Ok(self.cos_coeffs.len())
    }

    /// Number of frequency terms (length of the cosine array).
    #[inline]
    pub fn num_terms(&self) -> usize {
        self.cos_coeffs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cos_coeffs.is_empty()
    }

    /// `(a_k, b_k)` for term `k`.
    pub fn term(&self, k: usize) -> Option<(f64, f64)> {
        Some((*self.cos_coeffs.get(k)?, *self.sin_coeffs.get(k)?))
    }

    /// Iterate `(k, a_k, b_k)`.
    pub fn terms(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.cos_coeffs
            .iter()
            .zip(&self.sin_coeffs)
            .enumerate()
            .map(|(k, (&a, &b))| (k, a, b))
    }

    /// Index of the highest term with a non-zero cosine or sine amplitude.
    pub fn highest_nonzero_term(&self) -> Option<usize> {
        self.terms()
            .filter(|&(_, a, b)| a != 0.0 || b != 0.0)
            .map(|(k, _, _)| k)
            .last()
    }
}

/// Raw `(Σ 2·cos(k·t)·y / N, Σ 2·sin(k·t)·y / N)` for one term.
///
/// The accumulation runs in index order so a term's value never depends on
/// how terms are scheduled.
fn term_sums(k: usize, times: &[f64], values: &[f64]) -> (f64, f64) {
    let n = times.len() as f64;
    let freq = k as f64;
    let mut a = 0.0;
    let mut b = 0.0;
    for (&t, &y) in times.iter().zip(values) {
        let (sin, cos) = (freq * t).sin_cos();
        a += 2.0 * cos * y;
        b += 2.0 * sin * y;
    }
    (a / n, b / n)
}

/// Compute Fourier coefficients of a sample series.
///
/// Produces `floor(N/2)` terms, each rounded per `config`, then halves the
/// zero-frequency pair so `cos_coeffs[0]` is the mean amplitude. A series of
/// one sample yields an empty set.
///
/// # Errors
/// `InvalidConfig` if the rounding precision is out of range.
pub fn forward_transform(series: &SampleSeries, config: &AnalysisConfig) -> Result<CoefficientSet> {
    config.validate()?;

    let times = series.times();
    let values = series.values();
    let n_terms = num_terms(series.len());

    tracing::debug!(
        samples = series.len(),
        num_terms = n_terms,
        precision_digits = ?config.precision_digits,
        "forward transform"
    );
    if n_terms > 0 && !series.is_uniform_one_period(UNIFORM_GRID_TOL) {
        tracing::debug!("sample times are not a uniform one-period grid; reconstruction will be approximate");
    }

    let terms: Vec<(f64, f64)> = iter_maybe_parallel!(0..n_terms)
        .map(|k| {
            let (a, b) = term_sums(k, times, values);
            let (a, b) = (config.round(a), config.round(b));
            tracing::trace!(term = k, cos = a, sin = b, "coefficient");
            (a, b)
        })
        .collect();

    let (mut cos_coeffs, mut sin_coeffs): (Vec<f64>, Vec<f64>) = terms.into_iter().unzip();
    if let (Some(a0), Some(b0)) = (cos_coeffs.first_mut(), sin_coeffs.first_mut()) {
        *a0 /= 2.0;
        *b0 /= 2.0;
    }

    Ok(CoefficientSet {
        cos_coeffs,
        sin_coeffs,
    })
}

/// Forward transform from parallel slices, validating them first.
///
/// # Errors
/// `InvalidInput` for empty, mismatched or non-finite input, plus the
/// errors of [`forward_transform`].
pub fn forward_transform_slices(
    times: &[f64],
    values: &[f64],
    config: &AnalysisConfig,
) -> Result<CoefficientSet> {
    let series = SampleSeries::from_slices(times, values)?;
    forward_transform(&series, config)
}

/// Evaluate the series at `t`. Terms are accumulated in ascending `k`.
fn evaluate_at(coeffs: &CoefficientSet, t: f64) -> f64 {
    let mut y = 0.0;
    for (k, a, b) in coeffs.terms() {
        let (sin, cos) = (k as f64 * t).sin_cos();
        y += a * cos + b * sin;
    }
    y
}

/// Reconstruct amplitudes at `times` from a coefficient set.
///
/// `times` is independent of the samples the coefficients came from and may
/// have any length. An empty coefficient set reconstructs to zeros.
///
/// # Errors
/// `ShapeMismatch` if the cosine and sine arrays differ in length;
/// `InvalidInput` if any evaluation time is non-finite.
pub fn inverse_transform(coeffs: &CoefficientSet, times: &[f64]) -> Result<Vec<f64>> {
    let n_terms = coeffs.check_shape()?;
    check_finite(times, SampleField::Time)?;

    tracing::debug!(
        num_terms = n_terms,
        points = times.len(),
        "inverse transform"
    );

    Ok(iter_maybe_parallel!(0..times.len())
        .map(|p| evaluate_at(coeffs, times[p]))
        .collect())
}
