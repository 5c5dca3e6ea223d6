//! Demo: Pure Tones, Off-Grid Sampling and Rounding
//!
//! Shows how a single harmonic lands in one coefficient on a uniform
//! one-period grid, how the same tone leaks across terms when the samples do
//! not cover one period, and how the rounding policy affects coefficients.

use fourier_core::{
    analyze, forward_transform, inverse_transform, uniform_period_grid, AnalysisConfig,
    SampleSeries, TieBreak,
};

fn tone(t: &[f64], k0: f64, amplitude: f64) -> Vec<f64> {
    t.iter().map(|&ti| amplitude * (k0 * ti).cos()).collect()
}

fn print_spectrum(label: &str, magnitudes: &[f64]) {
    let shown: Vec<String> = magnitudes.iter().map(|m| format!("{m:.4}")).collect();
    println!("  {label}: [{}]", shown.join(", "));
}

fn main() {
    println!("=== Demo: Pure Tones ===\n");

    // --- Section 1: One period, uniform grid ---
    println!("--- Uniform One-Period Grid (N = 16, k0 = 3, A = 2) ---");
    let t = uniform_period_grid(16);
    let series = SampleSeries::new(t.clone(), tone(&t, 3.0, 2.0)).unwrap();
    let result = analyze(&series, &AnalysisConfig::default()).unwrap();
    print_spectrum("spectrum", &result.spectrum.magnitudes);
    println!("  max reconstruction error: {:.3e}", result.max_abs_residual());

    // --- Section 2: Same tone, samples spanning half a period ---
    println!("\n--- Half-Period Sampling (leakage) ---");
    let t_half: Vec<f64> = t.iter().map(|&ti| ti / 2.0).collect();
    let series = SampleSeries::new(t_half.clone(), tone(&t_half, 3.0, 2.0)).unwrap();
    let result = analyze(&series, &AnalysisConfig::default()).unwrap();
    print_spectrum("spectrum", &result.spectrum.magnitudes);
    println!("  max reconstruction error: {:.3e}", result.max_abs_residual());

    // --- Section 3: Reconstruction between samples ---
    println!("\n--- Reconstruction on a Finer Grid ---");
    let series = SampleSeries::from_uniform_period(tone(&t, 3.0, 2.0)).unwrap();
    let coeffs = forward_transform(&series, &AnalysisConfig::default()).unwrap();
    let fine = uniform_period_grid(64);
    let yr = inverse_transform(&coeffs, &fine).unwrap();
    let worst = fine
        .iter()
        .zip(&yr)
        .map(|(&ti, &y)| (y - 2.0 * (3.0 * ti).cos()).abs())
        .fold(0.0, f64::max);
    println!("  64 points, max error vs. true tone: {worst:.3e}");

    // --- Section 4: Rounding policy ---
    println!("\n--- Rounding Policy ---");
    let series = SampleSeries::from_uniform_period(tone(&t, 1.0, 1.0 / 3.0)).unwrap();
    for (label, config) in [
        ("8 digits, half-even", AnalysisConfig::default()),
        (
            "3 digits, half-away",
            AnalysisConfig::default()
                .with_precision_digits(Some(3))
                .with_tie_break(TieBreak::HalfAwayFromZero),
        ),
        ("unrounded", AnalysisConfig::unrounded()),
    ] {
        let coeffs = forward_transform(&series, &config).unwrap();
        println!("  {label:<20} a_1 = {:.17}", coeffs.cos_coeffs[1]);
    }
}
