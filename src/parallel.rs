//! Feature-gated parallel iteration.
//!
//! With the `parallel` feature (on by default) the macros below hand their
//! input to rayon; without it they fall back to plain sequential iterators,
//! which keeps the crate usable on targets without threads (e.g. WASM).
//!
//! Only independent work goes through these macros: one frequency term per
//! item in the forward transform, one evaluation time per item in the
//! inverse transform. The summation inside an item always runs sequentially,
//! so results do not depend on which backend is compiled in.

/// Iterate an owned range or collection, in parallel when available.
///
/// ```ignore
/// use crate::iter_maybe_parallel;
///
/// let squares: Vec<usize> = iter_maybe_parallel!(0..num_terms)
///     .map(|k| k * k)
///     .collect();
/// ```
#[macro_export]
macro_rules! iter_maybe_parallel {
    ($expr:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::iter::IntoParallelIterator;

            IntoParallelIterator::into_par_iter($expr)
        }
        #[cfg(not(feature = "parallel"))]
        {
            IntoIterator::into_iter($expr)
        }
    }};
}

/// Iterate a slice by reference, in parallel when available.
#[macro_export]
macro_rules! slice_maybe_parallel {
    ($expr:expr) => {{
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            $expr.par_iter()
        }
        #[cfg(not(feature = "parallel"))]
        {
            $expr.iter()
        }
    }};
}

pub use iter_maybe_parallel;
pub use slice_maybe_parallel;
