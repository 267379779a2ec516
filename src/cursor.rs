//! Stateful traversal position over an array.

use std::fmt;

use rand::Rng;

use crate::error::{ArrayError, Result};

/// True mathematical modulo for indices: `wrap_index(-1, 5) == 4`.
///
/// # Panics
/// Panics if `len` is zero.
pub fn wrap_index(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

/// Traversal orders that are declared but have no semantics yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalMode {
    Palindrome,
    Urn,
    Relative,
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalMode::Palindrome => write!(f, "palindrome"),
            TraversalMode::Urn => write!(f, "urn"),
            TraversalMode::Relative => write!(f, "relative"),
        }
    }
}

/// Index into a sequence of `len` elements that wraps on every relative move.
///
/// The cursor does not own the sequence; every move takes the current length
/// so it can never be read stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexCursor {
    position: usize,
}

impl IndexCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves one step forward. `None` for an empty sequence.
    pub fn advance(&mut self, len: usize) -> Option<usize> {
        self.step(1, len)
    }

    /// Moves one step back. `None` for an empty sequence.
    pub fn retreat(&mut self, len: usize) -> Option<usize> {
        self.step(-1, len)
    }

    fn step(&mut self, delta: i64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        self.position = wrap_index(self.position as i64 + delta, len);
        Some(self.position)
    }

    /// Uniform pick in `[0, len)`. Leaves the cursor where it is.
    pub fn random<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Option<usize> {
        (len > 0).then(|| rng.gen_range(0..len))
    }

    /// Pulls the position back into `[0, len)` after the sequence changed size.
    pub fn rewrap(&mut self, len: usize) {
        self.position = if len == 0 {
            0
        } else {
            self.position % len
        };
    }

    /// Moves according to `mode`. None of the modes are supported yet, so
    /// this always reports [`ArrayError::NotImplemented`].
    pub fn traverse(&mut self, mode: TraversalMode, _len: usize) -> Result<usize> {
        Err(ArrayError::NotImplemented(match mode {
            TraversalMode::Palindrome => "palindrome traversal",
            TraversalMode::Urn => "urn traversal",
            TraversalMode::Relative => "relative traversal",
        }))
    }
}
