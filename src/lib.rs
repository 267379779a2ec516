//! # seqarray
//!
//! Typed, single-dimensional data arrays for generating musical parameter
//! sequences: pitches, durations, amplitudes and the like.
//!
//! A [`DataArray`] infers whether it holds numeric or nominal data, keeps
//! summary statistics cached for numeric contents, traverses its elements
//! with a wrapping cursor, and exposes a chainable pipeline of transforms
//! (normalization, resampling, morphing, pitch quantization, rhythmic unit
//! conversion and more).
//!
//! ```rust
//! use seqarray::{FillOptions, Generator, Interpolation, array};
//!
//! let mut contour = array(vec![0.0, 3.0, 1.0, 4.0], Some("contour")).unwrap();
//! contour
//!     .fit(7, Interpolation::Linear)
//!     .rescale(60.0, 72.0)
//!     .pq_named("minor")
//!     .unwrap()
//!     .round();
//!
//! assert_eq!(contour.len(), 7);
//! assert_eq!(contour.min(), 60.0);
//!
//! let mut ramp = seqarray::DataArray::new();
//! ramp.fill(Generator::Line, FillOptions::with_length(5));
//! assert_eq!(ramp.numbers(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//! ```
//!
//! The pure functions behind every method live in [`transform`] and
//! [`stats`] and can be used on plain slices.

pub mod array;
pub mod cursor;
pub mod error;
pub mod stats;
pub mod transform;
pub mod types;
pub mod validation_utils;
pub mod value;

#[cfg(test)]
mod test_utils;

pub use crate::array::{DataArray, Query, QueryOutput};
pub use crate::cursor::{IndexCursor, TraversalMode};
pub use crate::error::{ArrayError, Result};
pub use crate::stats::Histogram;
pub use crate::transform::{FillOptions, Generator, Interpolation, Scale};
pub use crate::types::{Validate, ValidationResult};
pub use crate::value::{ArrayType, Value};

/// Builds an array from a sequence or a string, optionally naming it.
///
/// Strings are split into single-character symbols; a bare number is
/// rejected.
pub fn array(input: impl Into<Value>, name: Option<&str>) -> Result<DataArray> {
    DataArray::from_value(input, name)
}

/// Alias of [`array`].
pub fn a(input: impl Into<Value>, name: Option<&str>) -> Result<DataArray> {
    array(input, name)
}

/// Alias of [`array`].
pub fn arr(input: impl Into<Value>, name: Option<&str>) -> Result<DataArray> {
    array(input, name)
}
