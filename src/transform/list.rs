//! Order and structure transforms.
//!
//! These work on any element type, so the same functions serve numeric and
//! nominal arrays.

use rand::{Rng, seq::SliceRandom};

use crate::{stats, value::Value};

/// Reverses element order.
pub fn mirror<T: Clone>(values: &[T]) -> Vec<T> {
    values.iter().rev().cloned().collect()
}

/// Reflects every value about `center` (default: the mean): `2c - v`.
pub fn invert(values: &[f64], center: Option<f64>) -> Vec<f64> {
    let center = center.unwrap_or_else(|| stats::mean(values));
    values.iter().map(|v| 2.0 * center - v).collect()
}

/// Uniform random permutation (Fisher–Yates).
pub fn shuffle<T: Clone, R: Rng + ?Sized>(values: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = values.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Cyclic rotation: element `i` of the result is `values[(i + amount) mod len]`.
///
/// A positive amount moves the read position forward, so `shift(1)` on
/// `[a, b, c]` gives `[b, c, a]`.
pub fn shift<T: Clone>(values: &[T], amount: i64) -> Vec<T> {
    if values.is_empty() {
        return Vec::new();
    }

    let len = values.len();
    let offset = amount.rem_euclid(len as i64) as usize;
    (0..len).map(|i| values[(i + offset) % len].clone()).collect()
}

/// Drops the last `start` elements, or, when `end` is given, the first
/// `start` and the last `end` elements.
pub fn truncate<T: Clone>(values: &[T], start: usize, end: Option<usize>) -> Vec<T> {
    let (head, tail) = match end {
        Some(end) => (start, end),
        None => (0, start),
    };

    let stop = values.len().saturating_sub(tail);
    if head >= stop {
        return Vec::new();
    }
    values[head..stop].to_vec()
}

/// `count` back-to-back copies.
pub fn repeat<T: Clone>(values: &[T], count: usize) -> Vec<T> {
    (0..count).flat_map(|_| values.iter().cloned()).collect()
}

pub fn concat<T: Clone>(values: &[T], other: &[T]) -> Vec<T> {
    [values, other].concat()
}

/// Stable de-duplication under `same`: keeps each first occurrence.
pub fn unique_by<T: Clone>(values: &[T], same: impl Fn(&T, &T) -> bool) -> Vec<T> {
    let mut kept: Vec<T> = Vec::new();
    for v in values {
        if !kept.iter().any(|k| same(k, v)) {
            kept.push(v.clone());
        }
    }
    kept
}

/// Stable de-duplication of array elements.
pub fn unique(values: &[Value]) -> Vec<Value> {
    unique_by(values, Value::same_class)
}

/// Ascending for numbers, lexicographic for symbols.
pub fn sort(values: &[Value]) -> Vec<Value> {
    let mut sorted = values.to_vec();
    sorted.sort_by(Value::sort_cmp);
    sorted
}
