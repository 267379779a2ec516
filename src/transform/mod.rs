//! # Transform pipeline
//!
//! Pure sequence-to-sequence functions. Nothing here holds state: each
//! function takes its input by slice and returns a fresh `Vec`, which is what
//! lets [`DataArray`](crate::DataArray) re-`set` the result and keep its
//! caches consistent.
//!
//! - [`scale`]: normalization, rescaling and nonlinear curves
//! - [`arithmetic`]: element-wise arithmetic and rectification
//! - [`resample`]: interpolation, `fit`, `stretch` and `morph`
//! - [`list`]: order and structure (mirror, shift, shuffle, unique, ...)
//! - [`pitch`]: pitch quantization against a [`Scale`]
//! - [`rhythm`]: note values ↔ beat grids ↔ intervals ↔ onset indices
//! - [`generate`]: shape and noise generators used by `fill`

pub mod arithmetic;
pub mod generate;
pub mod list;
pub mod pitch;
pub mod resample;
pub mod rhythm;
pub mod scale;

pub use arithmetic::{add, ceil, floor, fwr, hwr, mult, round};
pub use generate::{FillOptions, Generator, GeneratorParseError, generate};
pub use list::{
    concat, invert, mirror, repeat, shift, shuffle, sort, truncate, unique, unique_by,
};
pub use pitch::{Scale, ScaleError, pq};
pub use resample::{Interpolation, InterpolationParseError, fit, fit_by_step, morph, stretch};
pub use rhythm::{
    DEFAULT_RESOLUTION, MAX_STEPS, beats_to_indices, beats_to_intervals, beats_to_notes, intervals_to_beats,
    notes_to_beats,
};
pub use scale::{exp_curve, log_curve, normalize, rescale};
