//! One-call analysis pipeline.
//!
//! Runs forward transform, reconstruction at the original sample times and
//! power spectrum in sequence, returning all three artifacts together.

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::series::SampleSeries;
use crate::spectrum::{power_spectrum, PowerSpectrum};
use crate::transform::{forward_transform, inverse_transform, CoefficientSet};

/// Outputs of a full analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct FourierAnalysis {
    /// The analyzed samples
    pub series: SampleSeries,
    /// Cosine/sine coefficients
    pub coefficients: CoefficientSet,
    /// Series evaluated at the sample times
    pub reconstructed: Vec<f64>,
    /// Magnitude per term
    pub spectrum: PowerSpectrum,
}

impl FourierAnalysis {
    /// Largest `|y_i - reconstructed_i|` over the samples.
    pub fn max_abs_residual(&self) -> f64 {
        self.series
            .values()
            .iter()
            .zip(&self.reconstructed)
            .map(|(y, yr)| (y - yr).abs())
            .fold(0.0, f64::max)
    }

    /// Number of frequency terms.
    pub fn num_terms(&self) -> usize {
        self.coefficients.num_terms()
    }
}

/// Analyze a sample series end to end.
///
/// # Errors
/// Propagates errors from the individual transforms unchanged.
pub fn analyze(series: &SampleSeries, config: &AnalysisConfig) -> Result<FourierAnalysis> {
    let coefficients = forward_transform(series, config)?;
    let reconstructed = inverse_transform(&coefficients, series.times())?;
    let spectrum = power_spectrum(&coefficients)?;

    tracing::info!(
        samples = series.len(),
        num_terms = coefficients.num_terms(),
        "analysis complete"
    );

    Ok(FourierAnalysis {
        series: series.clone(),
        coefficients,
        reconstructed,
        spectrum,
    })
}
