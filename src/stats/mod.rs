//! # Descriptive statistics
//!
//! Pure reducers over a slice of floats. NaN anywhere in the input propagates
//! to the result, and an empty slice yields NaN rather than panicking, so the
//! array can cache these values unconditionally.
//!
//! ```rust
//! use seqarray::stats;
//!
//! let data = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(stats::mean(&data), 2.5);
//! assert_eq!(stats::median(&data), 2.5);
//! assert_eq!(stats::midrange(&data), 2.5);
//! ```

pub mod nominal;

use itertools::Itertools;
use num_traits::Float;

pub use nominal::{Histogram, classes, histo};

fn count<F: Float>(n: usize) -> F {
    F::from(n).unwrap_or_else(F::nan)
}

fn has_nan<F: Float>(values: &[F]) -> bool {
    values.iter().any(|v| v.is_nan())
}

pub fn sum<F: Float>(values: &[F]) -> F {
    values.iter().fold(F::zero(), |acc, &v| acc + v)
}

pub fn min<F: Float>(values: &[F]) -> F {
    extreme(values, |candidate, current| candidate < current)
}

pub fn max<F: Float>(values: &[F]) -> F {
    extreme(values, |candidate, current| candidate > current)
}

fn extreme<F: Float>(values: &[F], better: impl Fn(F, F) -> bool) -> F {
    let Some((&first, rest)) = values.split_first() else {
        return F::nan();
    };

    rest.iter().fold(first, |acc, &v| {
        if acc.is_nan() || v.is_nan() {
            F::nan()
        } else if better(v, acc) {
            v
        } else {
            acc
        }
    })
}

pub fn mean<F: Float>(values: &[F]) -> F {
    if values.is_empty() {
        return F::nan();
    }
    sum(values) / count(values.len())
}

fn squared_deviations<F: Float>(values: &[F]) -> F {
    let m = mean(values);
    values.iter().fold(F::zero(), |acc, &v| acc + (v - m) * (v - m))
}

/// Sample variance (divisor `n - 1`). NaN for fewer than two values.
pub fn variance<F: Float>(values: &[F]) -> F {
    if values.len() < 2 {
        return F::nan();
    }
    squared_deviations(values) / count(values.len() - 1)
}

/// Population variance (divisor `n`).
pub fn pvariance<F: Float>(values: &[F]) -> F {
    if values.is_empty() {
        return F::nan();
    }
    squared_deviations(values) / count(values.len())
}

/// Sample standard deviation.
pub fn std<F: Float>(values: &[F]) -> F {
    variance(values).sqrt()
}

/// Population standard deviation.
pub fn pstd<F: Float>(values: &[F]) -> F {
    pvariance(values).sqrt()
}

/// Middle of the sorted values; the mean of the two middle values for an
/// even count.
pub fn median<F: Float>(values: &[F]) -> F {
    if values.is_empty() || has_nan(values) {
        return F::nan();
    }

    let sorted = values
        .iter()
        .copied()
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .collect_vec();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / count(2)
    } else {
        sorted[mid]
    }
}

/// Most frequent value. Among equally frequent values the one seen first wins.
pub fn mode<F: Float>(values: &[F]) -> F {
    let mut tallies: Vec<(F, usize)> = Vec::new();

    for &v in values {
        match tallies
            .iter_mut()
            .find(|(seen, _)| *seen == v || (seen.is_nan() && v.is_nan()))
        {
            Some((_, n)) => *n += 1,
            None => tallies.push((v, 1)),
        }
    }

    // Strictly greater keeps the earliest value on ties.
    tallies
        .into_iter()
        .fold(None, |best: Option<(F, usize)>, (v, n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((v, n)),
        })
        .map(|(v, _)| v)
        .unwrap_or_else(F::nan)
}

/// `(min + max) / 2`.
pub fn midrange<F: Float>(values: &[F]) -> F {
    (min(values) + max(values)) / count(2)
}

/// The statistics an array keeps cached for numeric data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Self {
        Summary {
            min: min(values),
            max: max(values),
            mean: mean(values),
            std: std(values),
        }
    }
}
