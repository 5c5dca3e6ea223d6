//! Analysis configuration.
//!
//! [`AnalysisConfig`] carries the rounding policy applied by the forward
//! transform and the presentation cutoff used by [`crate::display`]. The
//! cutoff never reaches the transforms themselves.
//!
//! ```
//! use fourier_core::config::{AnalysisConfig, TieBreak};
//!
//! let config = AnalysisConfig::default()
//!     .with_precision_digits(Some(6))
//!     .with_tie_break(TieBreak::HalfAwayFromZero);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::helpers::{round_to_digits, MAX_PRECISION_DIGITS};

/// Default number of fractional digits kept in each coefficient.
pub const DEFAULT_PRECISION_DIGITS: u32 = 8;

/// Default number of leading terms shown by presentation code.
pub const DEFAULT_MAX_TERMS_CONSIDERED: usize = 40;

/// Tie-break rule used when a scaled coefficient lies exactly halfway
/// between two representable values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Round half to even (banker's rounding).
    #[default]
    HalfEven,
    /// Round half away from zero.
    HalfAwayFromZero,
}

/// Configuration for a Fourier analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Fractional decimal digits kept per coefficient; `None` stores raw sums.
    pub precision_digits: Option<u32>,
    /// Tie-break rule for rounding.
    pub tie_break: TieBreak,
    /// Leading terms shown by presentation code; `None` shows up to the
    /// highest non-zero term.
    pub max_terms_considered: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            precision_digits: Some(DEFAULT_PRECISION_DIGITS),
            tie_break: TieBreak::HalfEven,
            max_terms_considered: Some(DEFAULT_MAX_TERMS_CONSIDERED),
        }
    }
}

impl AnalysisConfig {
    /// Configuration that stores unrounded coefficients.
    pub fn unrounded() -> Self {
        Self {
            precision_digits: None,
            ..Self::default()
        }
    }

    /// Set the rounding precision.
    pub fn with_precision_digits(mut self, digits: Option<u32>) -> Self {
        self.precision_digits = digits;
        self
    }

    /// Set the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the presentation cutoff.
    pub fn with_max_terms_considered(mut self, max_terms: Option<usize>) -> Self {
        self.max_terms_considered = max_terms;
        self
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if let Some(digits) = self.precision_digits {
            if digits > MAX_PRECISION_DIGITS {
                return Err(Error::InvalidConfig(format!(
                    "precision_digits must be at most {}, got {}",
                    MAX_PRECISION_DIGITS, digits
                )));
            }
        }
        Ok(())
    }

    /// Apply the rounding policy to one coefficient.
    #[inline]
    pub fn round(&self, x: f64) -> f64 {
        match self.precision_digits {
            Some(digits) => round_to_digits(x, digits, self.tie_break),
            None => x,
        }
    }
}
