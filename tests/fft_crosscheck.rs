//! Cross-check the direct summation against an FFT on uniform grids.
//!
//! On `t_i = 2π·i/N` the forward transform coincides with the real part of
//! the DFT: `a_k = 2·Re(X_k)/N` and `b_k = -2·Im(X_k)/N`, halved at `k = 0`.
//! The FFT is used only here as an independent oracle.

use fourier_core::{forward_transform, uniform_period_grid, AnalysisConfig, SampleSeries};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

fn fft_coefficients(values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = values.len();
    let mut buffer: Vec<Complex<f64>> = values.iter().map(|&y| Complex::new(y, 0.0)).collect();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    let scale = 2.0 / n as f64;
    let mut cos: Vec<f64> = buffer[..n / 2].iter().map(|c| c.re * scale).collect();
    let mut sin: Vec<f64> = buffer[..n / 2].iter().map(|c| -c.im * scale).collect();
    if let (Some(a0), Some(b0)) = (cos.first_mut(), sin.first_mut()) {
        *a0 /= 2.0;
        *b0 /= 2.0;
    }
    (cos, sin)
}

#[test]
fn test_matches_fft_on_random_signals() {
    let mut rng = StdRng::seed_from_u64(42);
    let normal = Normal::new(0.0, 1.0).unwrap();

    for &n in &[2usize, 3, 8, 17, 64, 129] {
        let values: Vec<f64> = (0..n).map(|_| normal.sample(&mut rng)).collect();
        let series = SampleSeries::new(uniform_period_grid(n), values.clone()).unwrap();
        let coeffs = forward_transform(&series, &AnalysisConfig::unrounded()).unwrap();
        let (fft_cos, fft_sin) = fft_coefficients(&values);

        assert_eq!(coeffs.num_terms(), fft_cos.len(), "n = {}", n);
        for k in 0..coeffs.num_terms() {
            assert!(
                (coeffs.cos_coeffs[k] - fft_cos[k]).abs() < 1e-9,
                "n = {}, a_{}: direct {} vs fft {}",
                n,
                k,
                coeffs.cos_coeffs[k],
                fft_cos[k]
            );
            assert!(
                (coeffs.sin_coeffs[k] - fft_sin[k]).abs() < 1e-9,
                "n = {}, b_{}: direct {} vs fft {}",
                n,
                k,
                coeffs.sin_coeffs[k],
                fft_sin[k]
            );
        }
    }
}

#[test]
fn test_rounded_coefficients_stay_within_half_unit() {
    let mut rng = StdRng::seed_from_u64(7);
    let normal = Normal::new(0.0, 3.0).unwrap();
    let n = 50;
    let values: Vec<f64> = (0..n).map(|_| normal.sample(&mut rng)).collect();
    let series = SampleSeries::new(uniform_period_grid(n), values.clone()).unwrap();
    let coeffs = forward_transform(&series, &AnalysisConfig::default()).unwrap();
    let (fft_cos, fft_sin) = fft_coefficients(&values);

    // 0.5e-8 from rounding, plus slack for summation order differences.
    for k in 0..coeffs.num_terms() {
        assert!((coeffs.cos_coeffs[k] - fft_cos[k]).abs() < 6e-9, "a_{}", k);
        assert!((coeffs.sin_coeffs[k] - fft_sin[k]).abs() < 6e-9, "b_{}", k);
    }
}
