//! # Resampling
//!
//! Sequences are treated as samples of a function over the index range
//! `[0, len - 1]`. Resampling evaluates that function at evenly spaced
//! positions, clamped at both ends.
//!
//! ## Interpolation Types
//!
//! - **Linear**: straight line between neighbouring samples (default)
//! - **Step**: holds the lower neighbour, i.e. a discrete step function
//! - **Cosine**: cosine-eased blend between neighbours
//!
//! Every kind returns the exact sample value at integer positions, so all of
//! them agree with linear interpolation at the sampled endpoints.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// How values between two samples are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    #[default]
    Linear,
    Step,
    Cosine,
}

impl Interpolation {
    /// Evaluates `values` at fractional index `x`.
    ///
    /// Positions outside `[0, len - 1]` are clamped to the first or last
    /// sample. An empty slice evaluates to NaN.
    pub fn evaluate(&self, values: &[f64], x: f64) -> f64 {
        let Some(&first) = values.first() else {
            return f64::NAN;
        };
        let last_index = values.len() - 1;

        if x <= 0.0 || last_index == 0 {
            return first;
        }

        if x >= last_index as f64 {
            return values[last_index];
        }

        let lower_index = (x.floor() as usize).min(last_index - 1);
        let upper_index = lower_index + 1;

        let lower_y = values[lower_index];
        let upper_y = values[upper_index];
        let t = x - lower_index as f64;

        match self {
            Interpolation::Linear => lower_y + t * (upper_y - lower_y),
            Interpolation::Step => lower_y,
            Interpolation::Cosine => {
                let eased = (1.0 - (t * std::f64::consts::PI).cos()) / 2.0;
                lower_y + eased * (upper_y - lower_y)
            }
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpolation::Linear => write!(f, "linear"),
            Interpolation::Step => write!(f, "step"),
            Interpolation::Cosine => write!(f, "cosine"),
        }
    }
}

#[derive(Debug, Error)]
pub enum InterpolationParseError {
    #[error("Invalid Interpolation: {0}")]
    InvalidValue(String),
}

impl FromStr for Interpolation {
    type Err = InterpolationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(Interpolation::Linear),
            "step" | "discrete" => Ok(Interpolation::Step),
            "cosine" | "cos" => Ok(Interpolation::Cosine),
            _ => Err(InterpolationParseError::InvalidValue(s.to_string())),
        }
    }
}

/// Fractional source positions for resampling `source_len` samples to `len`.
fn positions(source_len: usize, len: usize) -> impl Iterator<Item = f64> {
    let span = source_len.saturating_sub(1) as f64;
    let divisor = len.saturating_sub(1).max(1) as f64;
    (0..len).map(move |i| i as f64 * span / divisor)
}

/// Resamples `values` to exactly `len` elements.
///
/// The first and last outputs are always the first and last inputs. An empty
/// input yields an empty output whatever `len` is.
pub fn fit(values: &[f64], len: usize, interpolation: Interpolation) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    positions(values.len(), len)
        .map(|x| interpolation.evaluate(values, x))
        .collect()
}

/// Resamples any sequence by holding the nearest lower element. Used for
/// data that cannot be blended, such as symbols.
pub fn fit_by_step<T: Clone>(values: &[T], len: usize) -> Vec<T> {
    if values.is_empty() {
        return Vec::new();
    }

    let last_index = values.len() - 1;
    positions(values.len(), len)
        .map(|x| values[(x.floor().max(0.0) as usize).min(last_index)].clone())
        .collect()
}

/// Resamples to `round(len * factor)` elements.
pub fn stretch(values: &[f64], factor: f64, interpolation: Interpolation) -> Vec<f64> {
    let len = (values.len() as f64 * factor).round().max(0.0) as usize;
    fit(values, len, interpolation)
}

/// Blends `source` into `target` by `t`, where `t = 0` is `source` and
/// `t = 1` is `target`.
///
/// Both sequences are first linearly resampled to the longer of the two
/// lengths. If either side is empty the other is returned unchanged.
pub fn morph(source: &[f64], target: &[f64], t: f64) -> Vec<f64> {
    if source.is_empty() {
        return target.to_vec();
    }
    if target.is_empty() {
        return source.to_vec();
    }

    let len = source.len().max(target.len());
    let a = fit(source, len, Interpolation::Linear);
    let b = fit(target, len, Interpolation::Linear);

    a.iter()
        .zip(&b)
        .map(|(x, y)| (1.0 - t) * x + t * y)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_float_eq, assert_seq_eq};

    #[test]
    fn test_linear_evaluation() {
        let values = [0.0, 10.0, 20.0];

        assert_float_eq(Interpolation::Linear.evaluate(&values, 0.5), 5.0, 1e-12);
        assert_float_eq(Interpolation::Linear.evaluate(&values, 1.75), 17.5, 1e-12);
    }

    #[test]
    fn test_clamping() {
        let values = [1.0, 2.0];

        assert_eq!(Interpolation::Linear.evaluate(&values, -3.0), 1.0);
        assert_eq!(Interpolation::Linear.evaluate(&values, 9.0), 2.0);
    }

    #[test]
    fn test_step_and_cosine() {
        let values = [0.0, 1.0];

        assert_eq!(Interpolation::Step.evaluate(&values, 0.9), 0.0);
        assert_float_eq(Interpolation::Cosine.evaluate(&values, 0.5), 0.5, 1e-12);
        assert!(Interpolation::Cosine.evaluate(&values, 0.25) < 0.25);
    }

    #[test]
    fn test_single_sample() {
        assert_eq!(Interpolation::Cosine.evaluate(&[4.0], 0.7), 4.0);
        assert!(Interpolation::Linear.evaluate(&[], 0.0).is_nan());
    }

    #[test]
    fn test_fit_upsample() {
        let result = fit(&[0.0, 1.0], 5, Interpolation::Linear);
        assert_seq_eq(&result, &[0.0, 0.25, 0.5, 0.75, 1.0], 1e-12);
    }

    #[test]
    fn test_fit_downsample_keeps_endpoints() {
        let input = [3.0, 9.0, 1.0, 4.0, 7.0];
        for kind in [Interpolation::Linear, Interpolation::Step, Interpolation::Cosine] {
            let result = fit(&input, 3, kind);
            assert_eq!(result.len(), 3);
            assert_eq!(result[0], 3.0);
            assert_eq!(result[2], 7.0);
        }
    }

    #[test]
    fn test_fit_edge_lengths() {
        assert!(fit(&[1.0, 2.0], 0, Interpolation::Linear).is_empty());
        assert_eq!(fit(&[1.0, 2.0], 1, Interpolation::Linear), vec![1.0]);
        assert_eq!(fit(&[5.0], 3, Interpolation::Linear), vec![5.0; 3]);
        assert!(fit(&[], 4, Interpolation::Linear).is_empty());
    }

    #[test]
    fn test_fit_by_step() {
        let result = fit_by_step(&["a", "b", "c"], 5);
        assert_eq!(result, vec!["a", "a", "b", "b", "c"]);
    }

    #[test]
    fn test_stretch() {
        assert_eq!(stretch(&[0.0, 1.0, 2.0, 3.0], 0.5, Interpolation::Linear).len(), 2);
        assert_eq!(stretch(&[0.0, 1.0], 2.0, Interpolation::Linear).len(), 4);
        assert!(stretch(&[0.0, 1.0], -1.0, Interpolation::Linear).is_empty());
    }

    #[test]
    fn test_morph_endpoints() {
        let a = [0.0, 1.0];
        let b = [4.0, 6.0, 8.0];

        let start = morph(&a, &b, 0.0);
        assert_seq_eq(&start, &[0.0, 0.5, 1.0], 1e-12);

        let end = morph(&a, &b, 1.0);
        assert_seq_eq(&end, &b, 1e-12);

        let mid = morph(&a, &b, 0.5);
        assert_seq_eq(&mid, &[2.0, 3.25, 4.5], 1e-12);
    }

    #[test]
    fn test_morph_empty_side() {
        assert_eq!(morph(&[], &[1.0, 2.0], 0.3), vec![1.0, 2.0]);
        assert_eq!(morph(&[1.0], &[], 0.3), vec![1.0]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Linear".parse::<Interpolation>().unwrap(), Interpolation::Linear);
        assert_eq!("discrete".parse::<Interpolation>().unwrap(), Interpolation::Step);
        assert!("spline".parse::<Interpolation>().is_err());
    }
}
