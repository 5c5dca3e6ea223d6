//! Helper functions for rounding and sample grids.

use crate::config::TieBreak;
use std::f64::consts::PI;

/// Small epsilon for numerical comparisons.
pub const NUMERICAL_EPS: f64 = 1e-10;

/// Largest supported number of fractional digits. Beyond this an `f64`
/// has no decimal precision left to round away.
pub const MAX_PRECISION_DIGITS: u32 = 15;

/// Round `x` to `digits` fractional decimal digits.
///
/// Rounds the exact binary value of `x`, not the product `x * 10^digits`:
/// when that product lands exactly on a half-way point only because the
/// multiplication rounded, the residual from a fused multiply-add decides the
/// direction. The tie-break rule applies to true ties only.
///
/// A negative zero result is normalized to `+0.0`, so coefficients that
/// round away entirely compare and print as plain zero.
///
/// Values whose scaled magnitude exceeds the `f64` integer range are already
/// coarser than the requested precision and are returned unchanged.
pub fn round_to_digits(x: f64, digits: u32, tie_break: TieBreak) -> f64 {
    // 10^d is exact in f64 for d <= 22
    let scale = 10f64.powi(digits as i32);
    let scaled = x * scale;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return x + 0.0;
    }
    let floor = scaled.floor();
    let rounded = if scaled - floor == 0.5 {
        // exact: x * scale - scaled
        let residual = x.mul_add(scale, -scaled);
        if residual > 0.0 {
            floor + 1.0
        } else if residual < 0.0 {
            floor
        } else {
            match tie_break {
                TieBreak::HalfEven => scaled.round_ties_even(),
                TieBreak::HalfAwayFromZero => scaled.round(),
            }
        }
    } else {
        scaled.round()
    };
    rounded / scale + 0.0
}

/// Sample times covering one period at unit angular step: `t_i = 2π·i/n`.
///
/// This is the grid on which the direct summation reconstructs a band-limited
/// signal exactly.
pub fn uniform_period_grid(n: usize) -> Vec<f64> {
    let step = 2.0 * PI / n as f64;
    (0..n).map(|i| i as f64 * step).collect()
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_digits_basic() {
        let r = round_to_digits(0.123456789, 8, TieBreak::HalfEven);
        assert!((r - 0.12345679).abs() < NUMERICAL_EPS);
        assert_eq!(round_to_digits(2.0, 8, TieBreak::HalfEven), 2.0);
    }

    #[test]
    fn test_round_to_digits_tie_breaks() {
        // 2.5 and 0.5 are exact in binary, so the ties are real ties.
        assert_eq!(round_to_digits(2.5, 0, TieBreak::HalfEven), 2.0);
        assert_eq!(round_to_digits(2.5, 0, TieBreak::HalfAwayFromZero), 3.0);
        assert_eq!(round_to_digits(-0.5, 0, TieBreak::HalfEven), 0.0);
        assert_eq!(round_to_digits(-0.5, 0, TieBreak::HalfAwayFromZero), -1.0);
        assert_eq!(round_to_digits(0.125, 2, TieBreak::HalfEven), 0.12);
        assert_eq!(round_to_digits(0.125, 2, TieBreak::HalfAwayFromZero), 0.13);
    }

    #[test]
    fn test_round_uses_exact_value_near_ties() {
        // 6.369840025 is stored slightly above the tie; x * 1e8 rounds onto it.
        assert_eq!(
            round_to_digits(6.369840025, 8, TieBreak::HalfEven),
            6.36984003
        );
        assert_eq!(
            round_to_digits(7.000000045, 8, TieBreak::HalfEven),
            7.00000005
        );
        // 1.000000375 is stored slightly below the tie.
        assert_eq!(
            round_to_digits(1.000000375, 8, TieBreak::HalfEven),
            1.00000037
        );
        assert_eq!(
            round_to_digits(0.123456785, 8, TieBreak::HalfAwayFromZero),
            0.12345678
        );
        assert_eq!(
            round_to_digits(-6.369840025, 8, TieBreak::HalfAwayFromZero),
            -6.36984003
        );
    }

    #[test]
    fn test_round_normalizes_negative_zero() {
        let r = round_to_digits(-1e-12, 8, TieBreak::HalfEven);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive(), "rounded -1e-12 should be +0.0");
    }

    #[test]
    fn test_round_huge_values_pass_through() {
        let big = 1e300;
        assert_eq!(round_to_digits(big, 8, TieBreak::HalfEven), big);
    }

    #[test]
    fn test_uniform_period_grid() {
        let t = uniform_period_grid(4);
        assert_eq!(t.len(), 4);
        assert_eq!(t[0], 0.0);
        assert!((t[1] - PI / 2.0).abs() < NUMERICAL_EPS);
        assert!((t[3] - 3.0 * PI / 2.0).abs() < NUMERICAL_EPS);
        assert!(uniform_period_grid(0).is_empty());
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }
}
