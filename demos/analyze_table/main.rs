//! Demo: Analyzing a Two-Column Sample Table
//!
//! Reads `time,amplitude` rows from a delimited text file, computes the
//! Fourier coefficients, reconstructs the signal at the sample times and
//! prints the coefficient table and power spectrum as text.
//!
//! Usage: cargo run --example analyze_table -- [path/to/samples.csv]
//!
//! Set `RUST_LOG=debug` to see the transform log events.

use std::path::PathBuf;
use std::process::ExitCode;

use fourier_core::display::{spectrum_window, CoefficientWindow};
use fourier_core::table::read_samples_from_path;
use fourier_core::{analyze, AnalysisConfig};
use tracing_subscriber::EnvFilter;

fn default_table() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join("data")
        .join("square_wave.csv")
}

fn bar(value: f64, scale: f64, width: usize) -> String {
    let len = if scale > 0.0 {
        ((value / scale) * width as f64).round() as usize
    } else {
        0
    };
    "#".repeat(len.min(width))
}

fn run(path: PathBuf) -> fourier_core::Result<()> {
    let config = AnalysisConfig::default();
    let series = read_samples_from_path(&path)?;
    let result = analyze(&series, &config)?;

    println!("=== Fourier Transform - {} ===\n", path.display());

    // --- Section 1: Sampled wave ---
    let (t_min, t_max) = series.time_range();
    let min = series.values().iter().cloned().fold(f64::INFINITY, f64::min);
    let max = series.values().iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    println!("--- Sampled Wave ({} samples) ---", series.len());
    println!("  time: [{t_min:.4}, {t_max:.4}]");
    println!("  amplitude: min={min:.4}, max={max:.4}, mean={:.4}", series.mean());
    if !series.is_uniform_one_period(1e-6) {
        println!("  note: samples are not a uniform one-period grid; reconstruction is approximate");
    }

    // --- Section 2: Coefficients ---
    let window = CoefficientWindow::new(&result.coefficients, &config)?;
    println!(
        "\n--- Discrete Fourier Transform ({} of {} terms) ---",
        window.len(),
        result.num_terms()
    );
    println!("  {:>4}  {:>14}  {:>14}", "k", "cosine", "sine");
    for k in 0..window.len() {
        println!(
            "  {:>4}  {:>14.8}  {:>14.8}",
            k, window.cos_coeffs[k], window.sin_coeffs[k]
        );
    }

    // --- Section 3: Reconstruction ---
    println!("\n--- Inverse DFT ({} samples) ---", result.reconstructed.len());
    println!("  max |y - y_r| = {:.6e}", result.max_abs_residual());

    // --- Section 4: Power spectrum ---
    let magnitudes = spectrum_window(&result.spectrum, &config);
    let peak = magnitudes.iter().cloned().fold(0.0, f64::max);
    println!("\n--- Power Spectrum ---");
    for (k, &m) in magnitudes.iter().enumerate() {
        println!("  {:>4}  {:>12.8}  {}", k, m, bar(m, peak, 40));
    }
    if let Some(k) = result.spectrum.dominant_term(false) {
        println!("\n  dominant non-DC term: k = {k}");
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_table);

    match run(path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
