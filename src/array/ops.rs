//! Chainable transforms on [`DataArray`].
//!
//! Each method computes a new sequence with the matching function in
//! [`transform`](crate::transform) and assigns it back. Infallible transforms
//! return `&mut Self`; those that take a string name, another sequence, or are
//! not supported yet return `Result<&mut Self>`.

use log::debug;

use super::DataArray;
use crate::{
    error::{ArrayError, Result},
    stats,
    transform::{self, FillOptions, Generator, Interpolation, Scale},
    value::{ArrayType, Value},
};

impl DataArray {
    fn is_numeric(&self) -> bool {
        self.array_type == Some(ArrayType::Numeric)
    }

    fn map_numbers(&mut self, f: impl FnOnce(&[f64]) -> Vec<f64>) -> &mut Self {
        let values = f(&self.numbers());
        self.assign_numbers(values)
    }

    fn map_values(&mut self, f: impl FnOnce(&[Value]) -> Vec<Value>) -> &mut Self {
        let values = f(&self.value);
        self.assign(values)
    }

    /// Resolves a sequence argument, rejecting bare scalars.
    fn sequence_arg(input: impl Into<Value>) -> Result<Vec<Value>> {
        match input.into() {
            Value::Collection(items) => Ok(items),
            Value::Symbol(s) => Ok(crate::value::explode(&s)),
            Value::Number(n) => Err(ArrayError::InvalidInput(format!("number {}", n))),
        }
    }

    // Generation

    /// Replaces the contents with a generated sequence. Random kinds draw from
    /// the array's own random source.
    pub fn fill(&mut self, kind: Generator, options: FillOptions) -> &mut Self {
        let values = transform::generate(kind, options, &mut self.rng);
        self.assign_numbers(values)
    }

    /// Alias of [`fill`](Self::fill).
    pub fn generate(&mut self, kind: Generator, options: FillOptions) -> &mut Self {
        self.fill(kind, options)
    }

    /// [`fill`](Self::fill) with the generator given by name.
    pub fn fill_with(&mut self, kind: &str, options: FillOptions) -> Result<&mut Self> {
        let kind: Generator = kind.parse()?;
        Ok(self.fill(kind, options))
    }

    // Snapshot

    /// Restores the snapshot taken at the first assignment. A no-op before
    /// anything was assigned.
    pub fn reset(&mut self) -> &mut Self {
        match self.original.clone() {
            Some(original) => self.assign(original),
            None => self,
        }
    }

    /// Alias of [`reset`](Self::reset).
    pub fn original(&mut self) -> &mut Self {
        self.reset()
    }

    // Range and shape

    /// Maps `[min, max]` onto `[0, 1]`; either bound defaults to the observed
    /// extreme.
    pub fn normalize(&mut self, min: Option<f64>, max: Option<f64>) -> &mut Self {
        self.map_numbers(|v| transform::normalize(v, min, max))
    }

    pub fn rescale(&mut self, new_min: f64, new_max: f64) -> &mut Self {
        self.map_numbers(|v| transform::rescale(v, new_min, new_max))
    }

    /// Alias of [`rescale`](Self::rescale).
    pub fn range(&mut self, new_min: f64, new_max: f64) -> &mut Self {
        self.rescale(new_min, new_max)
    }

    /// Alias of [`rescale`](Self::rescale).
    pub fn scale(&mut self, new_min: f64, new_max: f64) -> &mut Self {
        self.rescale(new_min, new_max)
    }

    pub fn exp_curve(&mut self, factor: f64) -> &mut Self {
        self.map_numbers(|v| transform::exp_curve(v, factor))
    }

    pub fn log_curve(&mut self, factor: f64) -> &mut Self {
        self.map_numbers(|v| transform::log_curve(v, factor))
    }

    /// Clamping to a range is not supported yet.
    pub fn limit(&mut self, _min: f64, _max: f64) -> Result<&mut Self> {
        Err(ArrayError::NotImplemented("limit"))
    }

    pub fn transpose(&mut self, _amount: f64) -> Result<&mut Self> {
        Err(ArrayError::NotImplemented("transpose"))
    }

    pub fn summarize(&mut self) -> Result<&mut Self> {
        Err(ArrayError::NotImplemented("summarize"))
    }

    // Resampling

    /// Resamples to exactly `len` elements. Non-numeric arrays are resampled
    /// by holding the nearest lower element, whatever `interpolation` says.
    pub fn fit(&mut self, len: usize, interpolation: Interpolation) -> &mut Self {
        if self.is_numeric() {
            self.map_numbers(|v| transform::fit(v, len, interpolation))
        } else {
            debug!("fit: {} array resampled by step", self.label());
            self.map_values(|v| transform::fit_by_step(v, len))
        }
    }

    /// Resamples to `round(len * factor)` elements.
    pub fn stretch(&mut self, factor: f64, interpolation: Interpolation) -> &mut Self {
        let len = (self.len() as f64 * factor).round().max(0.0) as usize;
        self.fit(len, interpolation)
    }

    /// Blends towards `target` by `t` (0 keeps this array, 1 becomes the
    /// target). `target` may be a plain sequence or another array.
    pub fn morph(&mut self, target: impl Into<Value>, t: f64) -> Result<&mut Self> {
        let target: Vec<f64> = Self::sequence_arg(target)?
            .iter()
            .map(Value::as_f64)
            .collect();
        Ok(self.map_numbers(|v| transform::morph(v, &target, t)))
    }

    // Arithmetic

    pub fn add(&mut self, amount: f64) -> &mut Self {
        self.map_numbers(|v| transform::add(v, amount))
    }

    pub fn mult(&mut self, factor: f64) -> &mut Self {
        self.map_numbers(|v| transform::mult(v, factor))
    }

    pub fn round(&mut self) -> &mut Self {
        self.map_numbers(transform::round)
    }

    pub fn floor(&mut self) -> &mut Self {
        self.map_numbers(transform::floor)
    }

    pub fn ceil(&mut self) -> &mut Self {
        self.map_numbers(transform::ceil)
    }

    /// Half-wave rectification: negatives become zero.
    pub fn hwr(&mut self) -> &mut Self {
        self.map_numbers(transform::hwr)
    }

    /// Full-wave rectification: absolute value.
    pub fn fwr(&mut self) -> &mut Self {
        self.map_numbers(transform::fwr)
    }

    /// Alias of [`fwr`](Self::fwr).
    pub fn abs(&mut self) -> &mut Self {
        self.fwr()
    }

    // Order and structure

    pub fn sort(&mut self) -> &mut Self {
        self.map_values(transform::sort)
    }

    /// Appends `other`, which may be a plain sequence or another array.
    pub fn concat(&mut self, other: impl Into<Value>) -> Result<&mut Self> {
        let other = Self::sequence_arg(other)?;
        Ok(self.map_values(|v| transform::concat(v, &other)))
    }

    pub fn repeat(&mut self, count: usize) -> &mut Self {
        self.map_values(|v| transform::repeat(v, count))
    }

    /// Alias of [`repeat`](Self::repeat).
    pub fn rep(&mut self, count: usize) -> &mut Self {
        self.repeat(count)
    }

    /// Drops the last `start` elements, or with `end` the first `start` and
    /// the last `end`.
    pub fn truncate(&mut self, start: usize, end: Option<usize>) -> &mut Self {
        self.map_values(|v| transform::truncate(v, start, end))
    }

    /// Alias of [`truncate`](Self::truncate).
    pub fn slice(&mut self, start: usize, end: Option<usize>) -> &mut Self {
        self.truncate(start, end)
    }

    /// Cyclic rotation; `shift(1)` turns `[a, b, c]` into `[b, c, a]`.
    pub fn shift(&mut self, amount: i64) -> &mut Self {
        self.map_values(|v| transform::shift(v, amount))
    }

    pub fn unique(&mut self) -> &mut Self {
        self.map_values(transform::unique)
    }

    /// Alias of [`unique`](Self::unique).
    pub fn uniq(&mut self) -> &mut Self {
        self.unique()
    }

    pub fn mirror(&mut self) -> &mut Self {
        self.map_values(transform::mirror)
    }

    /// Alias of [`mirror`](Self::mirror).
    pub fn reverse(&mut self) -> &mut Self {
        self.mirror()
    }

    /// Reflects every value about `center`, the mean when `None`.
    pub fn invert(&mut self, center: Option<f64>) -> &mut Self {
        self.map_numbers(|v| transform::invert(v, center))
    }

    /// Alias of [`invert`](Self::invert).
    pub fn flip(&mut self, center: Option<f64>) -> &mut Self {
        self.invert(center)
    }

    pub fn shuffle(&mut self) -> &mut Self {
        let values = transform::shuffle(&self.value, &mut self.rng);
        self.assign(values)
    }

    /// Alias of [`shuffle`](Self::shuffle).
    pub fn randomize(&mut self) -> &mut Self {
        self.shuffle()
    }

    // Nominal analysis

    /// Replaces the contents with the count of each distinct value and
    /// forces the type to nominal. The classes and histogram stay cached, so
    /// the analysis can be read back with [`get`](Self::get). Only
    /// [`reset`](Self::reset) recovers the counted data.
    pub fn histo(&mut self) -> &mut Self {
        let histogram = stats::histo(&self.value);
        let counts = histogram.counts().into_iter().map(|c| c as f64).collect();

        self.assign_numbers(counts);
        self.array_type = Some(ArrayType::Nominal);
        self.summary = None;
        self.normalized.clear();
        self.classes = Some(histogram.classes());
        self.histogram = Some(histogram);
        self
    }

    /// Alias of [`histo`](Self::histo).
    pub fn histogram(&mut self) -> &mut Self {
        self.histo()
    }

    // Pitch

    /// Snaps every value to the nearest pitch of `scale`.
    pub fn pq(&mut self, scale: &Scale) -> &mut Self {
        self.map_numbers(|v| transform::pq(v, scale))
    }

    /// [`pq`](Self::pq) with a scale from the built-in table.
    pub fn pq_named(&mut self, name: &str) -> Result<&mut Self> {
        let scale = Scale::named(name)?;
        Ok(self.pq(&scale))
    }

    /// [`pq`](Self::pq) with explicit pitch-class degrees.
    pub fn pq_degrees(&mut self, degrees: Vec<f64>) -> Result<&mut Self> {
        let scale = Scale::new(degrees)?;
        Ok(self.pq(&scale))
    }

    /// Alias of [`pq`](Self::pq).
    pub fn pitch_scale(&mut self, scale: &Scale) -> &mut Self {
        self.pq(scale)
    }

    /// Alias of [`pq`](Self::pq).
    pub fn pitch_quantize(&mut self, scale: &Scale) -> &mut Self {
        self.pq(scale)
    }

    // Rhythm

    pub fn notes_to_beats(&mut self, resolution: u32) -> &mut Self {
        self.map_numbers(|v| transform::notes_to_beats(v, resolution))
    }

    pub fn ntob(&mut self, resolution: u32) -> &mut Self {
        self.notes_to_beats(resolution)
    }

    pub fn beats_to_notes(&mut self, resolution: u32) -> &mut Self {
        self.map_numbers(|v| transform::beats_to_notes(v, resolution))
    }

    pub fn bton(&mut self, resolution: u32) -> &mut Self {
        self.beats_to_notes(resolution)
    }

    pub fn intervals_to_beats(&mut self) -> &mut Self {
        self.map_numbers(transform::intervals_to_beats)
    }

    pub fn itob(&mut self) -> &mut Self {
        self.intervals_to_beats()
    }

    pub fn beats_to_intervals(&mut self) -> &mut Self {
        self.map_numbers(transform::beats_to_intervals)
    }

    pub fn btoi(&mut self) -> &mut Self {
        self.beats_to_intervals()
    }

    pub fn beats_to_indices(&mut self) -> &mut Self {
        self.map_numbers(transform::beats_to_indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        array::{Query, QueryOutput},
        test_utils::{assert_float_eq, assert_seq_eq},
        value::numbers,
    };

    #[test]
    fn test_normalize_updates_cache() {
        let mut array = DataArray::from(vec![1.0, 2.0, 3.0, 4.0]);
        array.normalize(None, None);

        assert_seq_eq(&array.numbers(), &[0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0], 1e-12);
        assert_eq!(array.min(), 0.0);
        assert_eq!(array.max(), 1.0);
    }

    #[test]
    fn test_fill_kinds() {
        let mut array = DataArray::with_seed(1);

        array.fill(Generator::Ones, FillOptions::with_length(4));
        assert_eq!(array.numbers(), vec![1.0; 4]);

        array.fill_with("zeroes", FillOptions::with_length(4)).unwrap();
        assert_eq!(array.numbers(), vec![0.0; 4]);

        assert!(array.fill_with("sawtooth", FillOptions::default()).is_err());
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let mut a = DataArray::with_seed(7);
        let mut b = DataArray::with_seed(7);
        a.fill(Generator::Noise, FillOptions::with_length(16));
        b.fill(Generator::Noise, FillOptions::with_length(16));

        assert_eq!(a.numbers(), b.numbers());
    }

    #[test]
    fn test_chaining() {
        let mut array = DataArray::from(vec![0.0, 1.0, 2.0]);
        array.mult(2.0).add(1.0).mirror().repeat(2);

        assert_eq!(array.numbers(), vec![5.0, 3.0, 1.0, 5.0, 3.0, 1.0]);
    }

    #[test]
    fn test_reset_restores_first_snapshot() {
        let mut array = DataArray::from(vec![3.0, 1.0, 2.0]);
        array.sort().add(10.0).reset();

        assert_eq!(array.numbers(), vec![3.0, 1.0, 2.0]);
        assert_eq!(array.mean(), 2.0);
    }

    #[test]
    fn test_morph_with_array_or_sequence() {
        let target = DataArray::from(vec![10.0, 20.0, 30.0]);

        let mut half = DataArray::from(vec![0.0, 0.0, 0.0]);
        half.morph(&target, 0.5).unwrap();
        assert_eq!(half.numbers(), vec![5.0, 10.0, 15.0]);

        let mut whole = DataArray::from(vec![0.0, 2.0]);
        whole.morph(vec![1.0, 1.0, 1.0], 1.0).unwrap();
        assert_eq!(whole.numbers(), vec![1.0, 1.0, 1.0]);

        assert!(whole.morph(3.0, 0.5).is_err());
    }

    #[test]
    fn test_fit_nominal_holds_steps() {
        let mut array = DataArray::from_value("ab", None).unwrap();
        array.fit(4, Interpolation::Linear);

        assert_eq!(
            array.values(),
            &[Value::from("a"), Value::from("a"), Value::from("a"), Value::from("b")][..]
        );
        assert_eq!(array.array_type(), Some(ArrayType::Nominal));
    }

    #[test]
    fn test_stretch() {
        let mut array = DataArray::from(vec![0.0, 1.0]);
        array.stretch(1.5, Interpolation::Linear);
        assert_seq_eq(&array.numbers(), &[0.0, 0.5, 1.0], 1e-12);
    }

    #[test]
    fn test_concat_accepts_array() {
        let tail = DataArray::from(vec![3.0, 4.0]);
        let mut array = DataArray::from(vec![1.0, 2.0]);
        array.concat(&tail).unwrap().concat(vec![5.0]).unwrap();

        assert_eq!(array.numbers(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(array.len(), 5);
    }

    #[test]
    fn test_histo_replaces_value_with_counts() {
        let mut array = DataArray::from_value("abacab", None).unwrap();
        array.histo();

        assert_eq!(array.numbers(), vec![3.0, 2.0, 1.0]);
        assert_eq!(array.array_type(), Some(ArrayType::Nominal));
        assert_eq!(
            array.get(Query::Classes).unwrap(),
            QueryOutput::Values(vec![Value::from("a"), Value::from("b"), Value::from("c")])
        );

        let QueryOutput::Histogram(histogram) = array.get(Query::Histogram).unwrap() else {
            panic!("Expected a histogram");
        };
        assert_eq!(histogram.total(), 6);
        assert_eq!(histogram.get(&Value::from("b")), 2);
    }

    #[test]
    fn test_unique_and_sort_nominal() {
        let mut array = DataArray::from_value("cabbac", None).unwrap();
        array.uniq();
        assert_eq!(array.values(), &crate::value::explode("cab")[..]);

        array.sort();
        assert_eq!(array.values(), &crate::value::explode("abc")[..]);
    }

    #[test]
    fn test_invert_about_mean() {
        let mut array = DataArray::from(vec![1.0, 2.0, 6.0]);
        array.flip(None);
        assert_eq!(array.numbers(), vec![5.0, 4.0, 0.0]);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut array = DataArray::with_seed(9);
        array.set(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        array.randomize();

        let mut sorted = array.numbers();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(sorted, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_pq_by_name() {
        let mut array = DataArray::from(vec![61.0, 63.0, 66.0]);
        array.pq_named("major").unwrap();
        assert_eq!(array.numbers(), vec![60.0, 62.0, 65.0]);

        assert!(matches!(
            array.pq_named("klingon"),
            Err(ArrayError::Scale(_))
        ));
    }

    #[test]
    fn test_rhythm_aliases() {
        let mut array = DataArray::from(vec![4.0, 8.0, 8.0]);
        array.ntob(8);
        assert_eq!(array.numbers(), vec![1.0, 0.0, 1.0, 1.0]);

        array.btoi();
        assert_eq!(array.numbers(), vec![2.0, 1.0, 1.0]);

        array.itob().bton(8);
        assert_eq!(array.numbers(), vec![4.0, 8.0, 8.0]);
    }

    #[test]
    fn test_unsupported_operations() {
        let mut array = DataArray::from(vec![1.0]);
        assert!(matches!(array.limit(0.0, 1.0), Err(ArrayError::NotImplemented("limit"))));
        assert!(matches!(array.transpose(2.0), Err(ArrayError::NotImplemented("transpose"))));
        assert!(matches!(array.summarize(), Err(ArrayError::NotImplemented("summarize"))));
        assert_eq!(array.values(), &numbers(&[1.0])[..]);
    }

    #[test]
    fn test_curves_keep_range() {
        let mut array = DataArray::from(vec![0.0, 5.0, 10.0]);
        array.exp_curve(2.0);

        assert_eq!(array.min(), 0.0);
        assert_eq!(array.max(), 10.0);
        assert_float_eq(array.numbers()[1], 2.5, 1e-12);
    }
}
