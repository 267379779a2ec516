//! Range mapping and nonlinear curves.

use log::{debug, warn};

use crate::stats;

/// Value assigned to every element when the input range collapses to a point.
pub const DEGENERATE_NORMALIZED: f64 = 0.5;

/// Linearly maps `[min, max]` onto `[0, 1]`.
///
/// Either bound defaults to the observed extreme of `values`. When the range
/// is empty (`min == max`) every element maps to [`DEGENERATE_NORMALIZED`].
/// Values outside explicit bounds are not clamped.
pub fn normalize(values: &[f64], min: Option<f64>, max: Option<f64>) -> Vec<f64> {
    let lo = min.unwrap_or_else(|| stats::min(values));
    let hi = max.unwrap_or_else(|| stats::max(values));
    let range = hi - lo;

    if range == 0.0 {
        debug!(
            "normalize: degenerate range [{}, {}], mapping to {}",
            lo, hi, DEGENERATE_NORMALIZED
        );
        return vec![DEGENERATE_NORMALIZED; values.len()];
    }

    values.iter().map(|v| (v - lo) / range).collect()
}

/// Linearly maps the observed range of `values` onto `[new_min, new_max]`.
pub fn rescale(values: &[f64], new_min: f64, new_max: f64) -> Vec<f64> {
    normalize(values, None, None)
        .into_iter()
        .map(|v| new_min + v * (new_max - new_min))
        .collect()
}

/// Raises the normalized sequence to `factor` and maps it back to the
/// original `[min, max]`. `factor > 1` pushes values towards the minimum.
///
/// A non-positive or non-finite factor leaves the sequence unchanged.
pub fn exp_curve(values: &[f64], factor: f64) -> Vec<f64> {
    curve(values, factor, "exp_curve", |x| x.powf(factor))
}

/// Log-warps the normalized sequence, `ln(1 + f·x) / ln(1 + f)`, and maps it
/// back to the original `[min, max]`. Larger factors bend harder towards the
/// maximum.
///
/// A non-positive or non-finite factor leaves the sequence unchanged.
pub fn log_curve(values: &[f64], factor: f64) -> Vec<f64> {
    curve(values, factor, "log_curve", |x| {
        (1.0 + factor * x).ln() / (1.0 + factor).ln()
    })
}

fn curve(values: &[f64], factor: f64, op: &str, shape: impl Fn(f64) -> f64) -> Vec<f64> {
    if !(factor > 0.0 && factor.is_finite()) {
        warn!("{}: factor must be positive and finite, got {}", op, factor);
        return values.to_vec();
    }

    let min = stats::min(values);
    let max = stats::max(values);
    let shaped: Vec<f64> = normalize(values, None, None).into_iter().map(shape).collect();

    rescale(&shaped, min, max)
}
