//! Presentation cutoff for coefficient and spectrum views.
//!
//! Plots and reports usually show only the leading terms. The views here
//! borrow a prefix of the arrays; the arrays themselves are never shortened.
//!
//! The cutoff comes from [`AnalysisConfig::max_terms_considered`]:
//! - `Some(m)`: show `min(m, len)` terms.
//! - `None`: show up to and including the highest non-zero term.

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::spectrum::PowerSpectrum;
use crate::transform::CoefficientSet;

/// Number of leading terms to show out of `len`.
pub fn display_cutoff(len: usize, highest_nonzero: Option<usize>, max_terms: Option<usize>) -> usize {
    match max_terms {
        Some(m) => m.min(len),
        None => highest_nonzero.map_or(0, |k| k + 1),
    }
}

/// Leading slice of a coefficient set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientWindow<'a> {
    pub cos_coeffs: &'a [f64],
    pub sin_coeffs: &'a [f64],
}

impl<'a> CoefficientWindow<'a> {
    /// View the terms of `coeffs` selected by the configured cutoff.
    ///
    /// # Errors
    /// `ShapeMismatch` if the cosine and sine arrays differ in length.
    pub fn new(coeffs: &'a CoefficientSet, config: &AnalysisConfig) -> Result<Self> {
        let len = coeffs.check_shape()?;
        let cutoff = display_cutoff(
            len,
            coeffs.highest_nonzero_term(),
            config.max_terms_considered,
        );
        Ok(Self {
            cos_coeffs: &coeffs.cos_coeffs[..cutoff],
            sin_coeffs: &coeffs.sin_coeffs[..cutoff],
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cos_coeffs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cos_coeffs.is_empty()
    }
}

/// Leading slice of a power spectrum selected by the configured cutoff.
pub fn spectrum_window<'a>(spectrum: &'a PowerSpectrum, config: &AnalysisConfig) -> &'a [f64] {
    let cutoff = display_cutoff(
        spectrum.len(),
        spectrum.highest_nonzero_term(),
        config.max_terms_considered,
    );
    &spectrum.magnitudes[..cutoff]
}
