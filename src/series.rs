//! Validated `(time, amplitude)` sample series.
//!
//! A [`SampleSeries`] keeps times and amplitudes in two parallel vectors in
//! input order. Times need not be sorted or evenly spaced; the transforms
//! evaluate `cos(k·t)` and `sin(k·t)` at whatever times they are given.
//!
//! Construction is the single validation point: a series is never empty and
//! never holds NaN or infinite values.

use serde::{Deserialize, Serialize};

use crate::error::{InputProblem, Result, SampleField};
use crate::helpers::{self, uniform_period_grid};
use std::f64::consts::PI;

/// One observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Sample time, in the angular units the frequency terms refer to.
    pub t: f64,
    /// Sampled amplitude.
    pub y: f64,
}

impl Sample {
    pub fn new(t: f64, y: f64) -> Self {
        Self { t, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((t, y): (f64, f64)) -> Self {
        Self { t, y }
    }
}

/// Ordered, non-empty, finite sample series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl SampleSeries {
    /// Create from parallel time and amplitude vectors.
    ///
    /// # Errors
    /// `InvalidInput` if the series is empty, the lengths differ, or any
    /// value is non-finite.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(InputProblem::LengthMismatch {
                times: times.len(),
                values: values.len(),
            }
            .into());
        }
        if times.is_empty() {
            return Err(InputProblem::Empty.into());
        }
        check_finite(&times, SampleField::Time)?;
        check_finite(&values, SampleField::Amplitude)?;
        Ok(Self { times, values })
    }

    /// Create from borrowed slices (copies the data).
    pub fn from_slices(times: &[f64], values: &[f64]) -> Result<Self> {
        Self::new(times.to_vec(), values.to_vec())
    }

    /// Create from a sequence of samples, keeping their order.
    pub fn from_samples<I, S>(samples: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Sample>,
    {
        let (times, values) = samples
            .into_iter()
            .map(|s| {
                let s = s.into();
                (s.t, s.y)
            })
            .unzip();
        Self::new(times, values)
    }

    /// Place `values` on the uniform one-period grid `t_i = 2π·i/N`.
    pub fn from_uniform_period(values: Vec<f64>) -> Result<Self> {
        let times = uniform_period_grid(values.len());
        Self::new(times, values)
    }

    /// Number of samples (always at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`; kept for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sample times in input order.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Amplitudes in input order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sample at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Sample> {
        Some(Sample::new(
            *self.times.get(index)?,
            *self.values.get(index)?,
        ))
    }

    /// Iterate samples in input order.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.times
            .iter()
            .zip(&self.values)
            .map(|(&t, &y)| Sample::new(t, y))
    }

    /// Mean amplitude.
    pub fn mean(&self) -> f64 {
        helpers::mean(&self.values).unwrap_or(0.0)
    }

    /// Smallest and largest sample time.
    pub fn time_range(&self) -> (f64, f64) {
        let t_min = self.times.iter().cloned().fold(f64::INFINITY, f64::min);
        let t_max = self.times.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        (t_min, t_max)
    }

    /// Whether consecutive times advance by `2π/N` within `tol`.
    ///
    /// This is the precondition for exact reconstruction at the sample
    /// points. The transforms do not enforce it; other layouts give a lossy
    /// or aliased reconstruction.
    pub fn is_uniform_one_period(&self, tol: f64) -> bool {
        let step = 2.0 * PI / self.len() as f64;
        self.times
            .windows(2)
            .all(|w| ((w[1] - w[0]) - step).abs() <= tol)
    }

    /// Consume into `(times, values)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.times, self.values)
    }
}

/// Reject the first NaN or infinite element of `xs`.
pub(crate) fn check_finite(xs: &[f64], field: SampleField) -> Result<()> {
    match xs.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(InputProblem::NonFinite { index, field }.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_new_keeps_input_order() {
        let series = SampleSeries::new(vec![3.0, 1.0, 2.0], vec![30.0, 10.0, 20.0]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.times(), &[3.0, 1.0, 2.0]);
        assert_eq!(series.values(), &[30.0, 10.0, 20.0]);
        assert_eq!(series.get(1), Some(Sample::new(1.0, 10.0)));
        assert_eq!(series.get(3), None);
    }

    #[test]
    fn test_empty_is_rejected() {
        let err = SampleSeries::new(vec![], vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(InputProblem::Empty)));
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let err = SampleSeries::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InputProblem::LengthMismatch {
                times: 2,
                values: 1
            })
        ));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        let err = SampleSeries::new(vec![0.0, f64::NAN], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InputProblem::NonFinite {
                index: 1,
                field: SampleField::Time
            })
        ));

        let err =
            SampleSeries::new(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, f64::NEG_INFINITY]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InputProblem::NonFinite {
                index: 2,
                field: SampleField::Amplitude
            })
        ));
    }

    #[test]
    fn test_from_samples_and_tuples() {
        let series = SampleSeries::from_samples(vec![(0.0, 1.0), (0.5, 2.0)]).unwrap();
        let collected: Vec<Sample> = series.iter().collect();
        assert_eq!(collected, vec![Sample::new(0.0, 1.0), Sample::new(0.5, 2.0)]);
        assert!((series.mean() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_one_period_detection() {
        let series = SampleSeries::from_uniform_period(vec![1.0; 16]).unwrap();
        assert!(series.is_uniform_one_period(1e-9));

        let series = SampleSeries::new(vec![0.0, 0.1, 0.2, 0.3], vec![1.0; 4]).unwrap();
        assert!(!series.is_uniform_one_period(1e-9));
    }

    #[test]
    fn test_time_range() {
        let series = SampleSeries::new(vec![2.0, -1.0, 5.0], vec![0.0; 3]).unwrap();
        assert_eq!(series.time_range(), (-1.0, 5.0));
    }
}
