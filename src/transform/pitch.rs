//! # Pitch quantization
//!
//! A [`Scale`] is a set of pitch-class degrees in semitones within the
//! octave. Quantizing snaps each value to the nearest degree in the same or an
//! adjacent octave, so `pq` works on MIDI-style note numbers as well as on
//! raw pitch classes.
//!
//! ```rust
//! use seqarray::transform::{Scale, pq};
//!
//! let major = Scale::named("major").unwrap();
//! assert_eq!(pq(&[61.0, 66.2, 70.0], &major), vec![60.0, 67.0, 69.0]);
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    types::{Validate, ValidationResult},
    validation_utils::{_chain, _return, validate_ascending, validate_finite, validate_non_empty},
};

const OCTAVE: f64 = 12.0;

const SCALE_TABLE: &[(&str, &[f64])] = &[
    ("chromatic", &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0]),
    ("major", &[0.0, 2.0, 4.0, 5.0, 7.0, 9.0, 11.0]),
    ("ionian", &[0.0, 2.0, 4.0, 5.0, 7.0, 9.0, 11.0]),
    ("minor", &[0.0, 2.0, 3.0, 5.0, 7.0, 8.0, 10.0]),
    ("aeolian", &[0.0, 2.0, 3.0, 5.0, 7.0, 8.0, 10.0]),
    ("harmonicminor", &[0.0, 2.0, 3.0, 5.0, 7.0, 8.0, 11.0]),
    ("melodicminor", &[0.0, 2.0, 3.0, 5.0, 7.0, 9.0, 11.0]),
    ("dorian", &[0.0, 2.0, 3.0, 5.0, 7.0, 9.0, 10.0]),
    ("phrygian", &[0.0, 1.0, 3.0, 5.0, 7.0, 8.0, 10.0]),
    ("lydian", &[0.0, 2.0, 4.0, 6.0, 7.0, 9.0, 11.0]),
    ("mixolydian", &[0.0, 2.0, 4.0, 5.0, 7.0, 9.0, 10.0]),
    ("locrian", &[0.0, 1.0, 3.0, 5.0, 6.0, 8.0, 10.0]),
    ("wholetone", &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]),
    ("pentatonic", &[0.0, 2.0, 4.0, 7.0, 9.0]),
    ("majorpentatonic", &[0.0, 2.0, 4.0, 7.0, 9.0]),
    ("minorpentatonic", &[0.0, 3.0, 5.0, 7.0, 10.0]),
    ("blues", &[0.0, 3.0, 5.0, 6.0, 7.0, 10.0]),
];

#[derive(Debug, Error)]
pub enum ScaleError {
    /// No scale with this name in the built-in table.
    #[error("Unknown scale: {0}")]
    Unknown(String),

    /// A scale needs at least one degree to quantize to.
    #[error("Scale must contain at least one degree")]
    Empty,
}

/// Allowed pitch classes for quantization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    degrees: Vec<f64>,
}

impl Scale {
    /// Builds a scale from explicit degrees. Degrees are reduced into
    /// `[0, 12)`, sorted and de-duplicated.
    pub fn new(degrees: Vec<f64>) -> Result<Self, ScaleError> {
        let mut reduced: Vec<f64> = degrees
            .into_iter()
            .filter(|d| d.is_finite())
            .map(|d| d.rem_euclid(OCTAVE))
            .collect();
        reduced.sort_by(f64::total_cmp);
        reduced.dedup();

        if reduced.is_empty() {
            return Err(ScaleError::Empty);
        }
        Ok(Scale { degrees: reduced })
    }

    /// The twelve chromatic pitch classes `0..11`.
    pub fn chromatic() -> Self {
        Scale {
            degrees: (0..12).map(f64::from).collect(),
        }
    }

    /// Looks a scale up by name. Case, spaces, hyphens and underscores are
    /// ignored, so `"Harmonic Minor"` and `"harmonic_minor"` both resolve.
    pub fn named(name: &str) -> Result<Self, ScaleError> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        SCALE_TABLE
            .iter()
            .find(|(n, _)| *n == key)
            .map(|(_, degrees)| Scale {
                degrees: degrees.to_vec(),
            })
            .ok_or_else(|| ScaleError::Unknown(name.to_string()))
    }

    pub fn degrees(&self) -> &[f64] {
        &self.degrees
    }

    /// Nearest scale pitch to `value`, checking the neighbouring octaves too.
    /// Ties resolve downwards.
    pub fn quantize(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }

        let pitch_class = value.rem_euclid(OCTAVE);
        let octave = value - pitch_class;

        let mut best = f64::NAN;
        let mut best_distance = f64::INFINITY;
        for &degree in &self.degrees {
            for candidate in [degree - OCTAVE, degree, degree + OCTAVE] {
                let distance = (pitch_class - candidate).abs();
                if distance < best_distance
                    || (distance == best_distance && candidate < best)
                {
                    best = candidate;
                    best_distance = distance;
                }
            }
        }

        octave + best
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::chromatic()
    }
}

impl FromStr for Scale {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scale::named(s)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees: Vec<String> = self.degrees.iter().map(f64::to_string).collect();
        write!(f, "[{}]", degrees.join(" "))
    }
}

impl Validate for Scale {
    fn validate(&self) -> ValidationResult {
        let mut warnings = Vec::new();
        let mut errors = Vec::new();

        let w = &mut warnings;
        let e = &mut errors;

        _chain(validate_non_empty(&self.degrees), w, e);
        _chain(validate_finite(&self.degrees), w, e);
        _chain(validate_ascending(&self.degrees), w, e);
        _return(warnings, errors)
    }
}

/// Quantizes every value to `scale`.
pub fn pq(values: &[f64], scale: &Scale) -> Vec<f64> {
    values.iter().map(|&v| scale.quantize(v)).collect()
}
