//! Sequence generators behind `fill` / `generate`.

use std::{f64::consts::PI, fmt, str::FromStr};

use log::warn;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

/// Shape of a generated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// Linear ramp from `min` to `max`.
    Line,
    /// Uniform noise in `[min, max)`.
    Noise,
    /// Normally distributed noise centred on the midpoint of `[min, max]`,
    /// with the range spanning six standard deviations.
    Gaussian,
    /// One sine period, scaled into `[min, max]`.
    Sine,
    /// One cosine period, scaled into `[min, max]`.
    Cosine,
    Zeroes,
    Ones,
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Line => write!(f, "line"),
            Generator::Noise => write!(f, "noise"),
            Generator::Gaussian => write!(f, "gaussian"),
            Generator::Sine => write!(f, "sine"),
            Generator::Cosine => write!(f, "cosine"),
            Generator::Zeroes => write!(f, "zeroes"),
            Generator::Ones => write!(f, "ones"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GeneratorParseError {
    #[error("Invalid Generator: {0}")]
    InvalidValue(String),
}

impl FromStr for Generator {
    type Err = GeneratorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(Generator::Line),
            "noise" | "random" => Ok(Generator::Noise),
            "gaussian" | "gauss" | "normal" => Ok(Generator::Gaussian),
            "sin" | "sine" => Ok(Generator::Sine),
            "cos" | "cosine" => Ok(Generator::Cosine),
            "zeroes" | "zeros" => Ok(Generator::Zeroes),
            "ones" => Ok(Generator::Ones),
            _ => Err(GeneratorParseError::InvalidValue(s.to_string())),
        }
    }
}

/// Length and range for `fill`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillOptions {
    pub length: usize,
    pub min: f64,
    pub max: f64,
}

impl Default for FillOptions {
    fn default() -> Self {
        FillOptions {
            length: 8,
            min: 0.0,
            max: 1.0,
        }
    }
}

impl FillOptions {
    pub fn with_length(length: usize) -> Self {
        FillOptions {
            length,
            ..Default::default()
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }
}

/// Produces `options.length` samples of `kind`. Only the random kinds draw
/// from `rng`.
pub fn generate<R: Rng + ?Sized>(kind: Generator, options: FillOptions, rng: &mut R) -> Vec<f64> {
    let FillOptions { length, min, max } = options;
    let range = max - min;
    let unit = |x: f64| min + range * x;

    match kind {
        Generator::Line => {
            let divisor = length.saturating_sub(1).max(1) as f64;
            (0..length).map(|i| unit(i as f64 / divisor)).collect()
        }
        Generator::Noise => (0..length).map(|_| unit(rng.r#gen::<f64>())).collect(),
        Generator::Gaussian => {
            let mean = min + range / 2.0;
            let std_dev = (range / 6.0).abs();
            match Normal::new(mean, std_dev) {
                Ok(normal) if mean.is_finite() && std_dev.is_finite() => {
                    (0..length).map(|_| normal.sample(rng)).collect()
                }
                _ => {
                    warn!("generate: gaussian over [{}, {}] is undefined, using NaN", min, max);
                    vec![f64::NAN; length]
                }
            }
        }
        Generator::Sine => periodic(length, f64::sin).map(unit).collect(),
        Generator::Cosine => periodic(length, f64::cos).map(unit).collect(),
        Generator::Zeroes => vec![0.0; length],
        Generator::Ones => vec![1.0; length],
    }
}

/// One period of `wave` over `length` points, mapped into `[0, 1]`.
fn periodic(length: usize, wave: fn(f64) -> f64) -> impl Iterator<Item = f64> {
    (0..length).map(move |i| (wave(2.0 * PI * i as f64 / length as f64) + 1.0) / 2.0)
}
