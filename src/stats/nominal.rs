//! Class and frequency analysis for nominal (symbolic) data.
//!
//! Classes are always reported in first-occurrence order so that histograms,
//! `classes` and `numClasses` are deterministic for a given input.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Distinct values of `values`, in the order they first appear.
pub fn classes(values: &[Value]) -> Vec<Value> {
    histo(values).classes()
}

/// Occurrence count per class.
pub fn histo(values: &[Value]) -> Histogram {
    let mut histogram = Histogram::default();
    for value in values {
        histogram.record(value);
    }
    histogram
}

/// Class → count mapping that remembers insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    entries: Vec<(Value, usize)>,
}

impl Histogram {
    fn record(&mut self, value: &Value) {
        match self.entries.iter_mut().find(|(class, _)| class.same_class(value)) {
            Some((_, n)) => *n += 1,
            None => self.entries.push((value.clone(), 1)),
        }
    }

    /// Count recorded for `class`, zero if never seen.
    pub fn get(&self, class: &Value) -> usize {
        self.entries
            .iter()
            .find(|(c, _)| c.same_class(class))
            .map_or(0, |(_, n)| *n)
    }

    pub fn classes(&self) -> Vec<Value> {
        self.entries.iter().map(|(class, _)| class.clone()).collect()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, n)| *n).collect()
    }

    /// Number of distinct classes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the analysed sequence.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, usize)> {
        self.entries.iter().map(|(class, n)| (class, *n))
    }
}
