//! Error types surfaced to callers of the array API.
//!
//! Computational methods never fail on out-of-range or malformed-but-coercible
//! input; only structurally invalid input and declared-but-unsupported
//! operations produce an [`ArrayError`].

use thiserror::Error;

use crate::{
    array::QueryParseError,
    transform::{GeneratorParseError, InterpolationParseError, ScaleError},
    value::ArrayTypeParseError,
};

/// Errors produced by [`DataArray`](crate::DataArray) operations.
#[derive(Debug, Error)]
pub enum ArrayError {
    /// The input is not an ordered sequence.
    ///
    /// Example: `set(Value::Number(3.0))`. A bare scalar cannot become an array.
    #[error("Invalid input: expected a sequence, got {0}")]
    InvalidInput(String),

    /// The operation is part of the public surface but has no semantics yet.
    ///
    /// Examples: `limit`, `transpose`, palindrome and urn traversal.
    #[error("Operation '{0}' is not supported yet")]
    NotImplemented(&'static str),

    #[error(transparent)]
    ArrayType(#[from] ArrayTypeParseError),

    #[error(transparent)]
    Query(#[from] QueryParseError),

    #[error(transparent)]
    Generator(#[from] GeneratorParseError),

    #[error(transparent)]
    Interpolation(#[from] InterpolationParseError),

    #[error(transparent)]
    Scale(#[from] ScaleError),
}

pub type Result<T, E = ArrayError> = std::result::Result<T, E>;
