//! # Rhythmic unit conversion
//!
//! Four interchangeable views of the same rhythm:
//!
//! | View        | Example (resolution 8)      | Meaning                            |
//! |-------------|-----------------------------|------------------------------------|
//! | note values | `[4, 8, 8]`                 | quarter, eighth, eighth            |
//! | beat grid   | `[1, 0, 1, 1]`              | onsets on a grid of `1/resolution` |
//! | intervals   | `[2, 1, 1]`                 | grid steps from each onset to the next |
//! | indices     | `[0, 2, 3]`                 | grid positions of the onsets       |
//!
//! A note value `n` lasts `resolution / n` grid steps. Conversions are
//! mutually inverse for well-formed input: every note value divides the
//! resolution, every interval is a positive integer and the beat grid starts
//! on an onset. [`validate_notes`], [`validate_intervals`] and
//! [`validate_beats`] check those conditions.

use log::{debug, warn};

use crate::{
    types::ValidationResult,
    validation_utils::{_chain, _return, validate_finite},
};

/// Grid subdivision used when none is given: quarter notes.
pub const DEFAULT_RESOLUTION: u32 = 4;

/// Longest run of grid steps a single note or interval may expand to.
pub const MAX_STEPS: usize = 1 << 16;

fn resolve(resolution: u32) -> f64 {
    if resolution == 0 {
        DEFAULT_RESOLUTION as f64
    } else {
        resolution as f64
    }
}

fn is_onset(step: f64) -> bool {
    step != 0.0 && !step.is_nan()
}

/// Whole number of grid steps for a duration, between one and [`MAX_STEPS`].
fn grid_steps(duration: f64) -> usize {
    let steps = duration.round();
    if !(steps >= 1.0 && steps <= MAX_STEPS as f64) {
        warn!(
            "rhythm: duration {} is not a step count in [1, {}], using 1",
            duration, MAX_STEPS
        );
        return 1;
    }
    steps as usize
}

fn onset_run(steps: usize) -> impl Iterator<Item = f64> {
    std::iter::once(1.0).chain(std::iter::repeat_n(0.0, steps - 1))
}

/// Note values to a beat grid. A `resolution` of 0 means
/// [`DEFAULT_RESOLUTION`].
pub fn notes_to_beats(notes: &[f64], resolution: u32) -> Vec<f64> {
    let resolution = resolve(resolution);
    notes
        .iter()
        .flat_map(|&n| onset_run(grid_steps(resolution / n)))
        .collect()
}

/// Beat grid to note values. A `resolution` of 0 means
/// [`DEFAULT_RESOLUTION`].
pub fn beats_to_notes(beats: &[f64], resolution: u32) -> Vec<f64> {
    let resolution = resolve(resolution);
    beats_to_intervals(beats)
        .into_iter()
        .map(|interval| resolution / interval)
        .collect()
}

/// Inter-onset intervals to a beat grid.
pub fn intervals_to_beats(intervals: &[f64]) -> Vec<f64> {
    intervals
        .iter()
        .flat_map(|&i| onset_run(grid_steps(i)))
        .collect()
}

/// Beat grid to inter-onset intervals. The last onset runs to the end of the
/// grid; rests before the first onset are dropped.
pub fn beats_to_intervals(beats: &[f64]) -> Vec<f64> {
    let onsets = beats_to_indices(beats);

    if let Some(&first) = onsets.first() {
        if first > 0.0 {
            debug!("beats_to_intervals: dropping {} leading rests", first);
        }
    }

    onsets
        .iter()
        .zip(onsets.iter().skip(1).chain(std::iter::once(&(beats.len() as f64))))
        .map(|(start, next)| next - start)
        .collect()
}

/// Grid positions of the onsets.
pub fn beats_to_indices(beats: &[f64]) -> Vec<f64> {
    beats
        .iter()
        .enumerate()
        .filter(|(_, step)| is_onset(**step))
        .map(|(i, _)| i as f64)
        .collect()
}

/// Checks that every note value spans a whole, positive number of grid steps.
pub fn validate_notes(notes: &[f64], resolution: u32) -> ValidationResult {
    let resolution = resolve(resolution);
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    _chain(validate_finite(notes), &mut warnings, &mut errors);

    for (i, &n) in notes.iter().enumerate() {
        let steps = resolution / n;
        if !(steps >= 1.0 && steps <= MAX_STEPS as f64 && steps.fract() == 0.0) {
            errors.push(format!(
                "note value {} at index {} does not divide resolution {}",
                n, i, resolution
            ));
        }
    }

    _return(warnings, errors)
}

/// Checks that every interval is a positive whole number of steps.
pub fn validate_intervals(intervals: &[f64]) -> ValidationResult {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    _chain(validate_finite(intervals), &mut warnings, &mut errors);

    for (i, &interval) in intervals.iter().enumerate() {
        if !(interval >= 1.0 && interval <= MAX_STEPS as f64 && interval.fract() == 0.0) {
            errors.push(format!(
                "interval {} at index {} is not a whole step count in [1, {}]",
                interval, i, MAX_STEPS
            ));
        }
    }

    _return(warnings, errors)
}

/// Checks that a beat grid holds only 0/1 steps and starts on an onset.
pub fn validate_beats(beats: &[f64]) -> ValidationResult {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    for (i, &step) in beats.iter().enumerate() {
        if step != 0.0 && step != 1.0 {
            errors.push(format!("beat {} at index {} is neither 0 nor 1", step, i));
        }
    }

    if beats.first().is_some_and(|&step| !is_onset(step)) {
        warnings.push("beat grid starts with a rest; leading rests are dropped".to_string());
    }

    _return(warnings, errors)
}
