//! # fourier-core
//!
//! Truncated Fourier series analysis of sampled real signals by direct
//! summation.
//!
//! This crate provides:
//! - Validated sample series (`(time, amplitude)` pairs in input order)
//! - Forward transform: cosine/sine coefficients up to the Nyquist term
//! - Inverse transform: reconstruction at arbitrary evaluation times
//! - Power spectrum: per-term magnitude of the coefficient pairs
//! - Presentation cutoffs and two-column table ingestion for front ends
//!
//! ## Conventions
//!
//! - Term `k` is the literal angular frequency `k` in the units of the
//!   sample times. Samples spanning `[0, 2π)` on a uniform grid reconstruct
//!   exactly; other layouts give an approximation.
//! - `N` samples yield `floor(N/2)` terms. `cos_coeffs[0]` is the mean.
//! - Coefficients are rounded to a configurable number of decimal digits
//!   (8 by default, ties to even).
//!
//! ## Example
//!
//! ```
//! use fourier_core::{analyze, AnalysisConfig, SampleSeries};
//!
//! let t = fourier_core::uniform_period_grid(16);
//! let y: Vec<f64> = t.iter().map(|&ti| 2.0 + (3.0 * ti).cos()).collect();
//! let series = SampleSeries::new(t, y).unwrap();
//!
//! let result = analyze(&series, &AnalysisConfig::default()).unwrap();
//! assert!((result.coefficients.cos_coeffs[0] - 2.0).abs() < 1e-8);
//! assert!((result.spectrum.magnitudes[3] - 1.0).abs() < 1e-8);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod parallel;

pub mod analysis;
pub mod config;
pub mod display;
pub mod error;
pub mod helpers;
pub mod series;
pub mod spectrum;
pub mod table;
pub mod transform;

pub use analysis::{analyze, FourierAnalysis};
pub use config::{AnalysisConfig, TieBreak};
pub use error::{Error, InputProblem, Result, SampleField};
pub use helpers::{round_to_digits, uniform_period_grid, NUMERICAL_EPS};
pub use series::{Sample, SampleSeries};
pub use spectrum::{power_spectrum, PowerSpectrum};
pub use transform::{
    forward_transform, forward_transform_slices, inverse_transform, num_terms, CoefficientSet,
};
