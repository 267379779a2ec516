//! # Data arrays
//!
//! [`DataArray`] owns a value sequence together with its name, inferred
//! type, cached statistics, traversal cursor and random source.
//!
//! Every mutation goes through one internal assignment step that
//! re-classifies the contents and, for numeric data, refreshes the cached
//! `min`, `max`, `mean`, `std` and normalized view. Transform methods (see
//! `ops.rs`) compute a new sequence with the pure functions in
//! [`transform`](crate::transform) and assign it back, returning `&mut Self`
//! so calls chain:
//!
//! ```rust
//! use seqarray::DataArray;
//!
//! let mut pitches = DataArray::from(vec![0.0, 4.0, 7.0, 12.0]);
//! pitches.add(60.0).mirror().shift(1);
//!
//! assert_eq!(pitches.numbers(), vec![67.0, 64.0, 60.0, 72.0]);
//! assert_eq!(pitches.min(), 60.0);
//! ```
//!
//! Numeric-looking input is coerced to floats; anything that cannot be read
//! becomes NaN with a logged warning rather than an error.

pub mod ops;
pub mod query;

use log::warn;
use rand::{RngCore, SeedableRng, rngs::StdRng};

pub use query::{Query, QueryOutput, QueryParseError};

use crate::{
    cursor::{IndexCursor, wrap_index},
    error::{ArrayError, Result},
    stats::{self, Histogram, Summary},
    transform,
    types::{Validate, ValidationResult},
    validation_utils::{_chain, _return, as_warnings, validate_finite},
    value::{ArrayType, Value, classify, coerce_numeric, explode, numbers},
};

/// A named, typed, single-dimensional sequence of parameter values.
#[derive(Debug)]
pub struct DataArray {
    name: String,
    array_type: Option<ArrayType>,
    value: Vec<Value>,
    original: Option<Vec<Value>>,
    normalized: Vec<f64>,
    summary: Option<Summary>,
    classes: Option<Vec<Value>>,
    histogram: Option<Histogram>,
    cursor: IndexCursor,
    rng: StdRng,
}

impl Clone for DataArray {
    /// Deep copy. The copy gets its own random source, seeded from a copy
    /// of this array's, so clones of the same array replay each other but
    /// never the origin.
    fn clone(&self) -> Self {
        let seed = self.rng.clone().next_u64();
        DataArray {
            name: self.name.clone(),
            array_type: self.array_type,
            value: self.value.clone(),
            original: self.original.clone(),
            normalized: self.normalized.clone(),
            summary: self.summary,
            classes: self.classes.clone(),
            histogram: self.histogram.clone(),
            cursor: self.cursor,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DataArray {
    fn default() -> Self {
        Self::new()
    }
}

impl DataArray {
    /// An empty, untyped array with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// An empty array whose shuffles, noise and random picks replay
    /// identically for the same `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        DataArray {
            name: String::new(),
            array_type: None,
            value: Vec::new(),
            original: None,
            normalized: Vec::new(),
            summary: None,
            classes: None,
            histogram: None,
            cursor: IndexCursor::new(),
            rng,
        }
    }

    /// Builds an array from a sequence or a string.
    ///
    /// A string is split into single-character symbols. A bare number is
    /// rejected with [`ArrayError::InvalidInput`].
    pub fn from_value(input: impl Into<Value>, name: Option<&str>) -> Result<Self> {
        let mut array = Self::new();
        let items = match input.into() {
            Value::Symbol(s) => explode(&s),
            Value::Collection(items) => items,
            Value::Number(n) => {
                return Err(ArrayError::InvalidInput(format!("number {}", n)));
            }
        };

        array.assign(items);
        if let Some(name) = name {
            array.set_name(name);
        }
        Ok(array)
    }

    /// Replaces the random source.
    pub fn set_rng(&mut self, rng: StdRng) -> &mut Self {
        self.rng = rng;
        self
    }

    /// Reseeds the random source in place.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.set_rng(StdRng::seed_from_u64(seed))
    }

    // Mutation

    /// Replaces the contents. `input` must be a sequence; a bare scalar is
    /// rejected with [`ArrayError::InvalidInput`].
    pub fn set(&mut self, input: impl Into<Value>) -> Result<&mut Self> {
        match input.into() {
            Value::Collection(items) => Ok(self.assign(items)),
            scalar => Err(ArrayError::InvalidInput(format!(
                "{} '{}'",
                scalar.kind(),
                scalar
            ))),
        }
    }

    /// [`set`](Self::set) followed by [`set_name`](Self::set_name).
    pub fn set_named(&mut self, input: impl Into<Value>, name: &str) -> Result<&mut Self> {
        self.set(input)?;
        Ok(self.set_name(name))
    }

    /// The single assignment step every mutation funnels through.
    pub(crate) fn assign(&mut self, values: Vec<Value>) -> &mut Self {
        if self.original.is_none() {
            self.original = Some(values.clone());
        }

        if let Some(array_type) = classify(&values) {
            self.array_type = Some(array_type);
        }

        self.histogram = None;
        self.classes = None;
        self.normalized.clear();
        self.summary = None;

        match self.array_type {
            Some(ArrayType::Numeric) => {
                let (coerced, warnings): (Vec<f64>, Vec<String>) = coerce_numeric(&values).into();
                for w in &warnings {
                    warn!("{}: {}", self.label(), w);
                }

                self.normalized = transform::normalize(&coerced, None, None);
                self.summary = Some(Summary::of(&coerced));
                self.value = numbers(&coerced);
            }
            Some(ArrayType::Nominal) => {
                self.classes = Some(stats::classes(&values));
                self.value = values;
            }
            _ => {
                self.value = values;
            }
        }

        self.cursor.rewrap(self.value.len());
        self
    }

    pub(crate) fn assign_numbers(&mut self, values: Vec<f64>) -> &mut Self {
        self.assign(numbers(&values))
    }

    pub fn set_name(&mut self, name: impl ToString) -> &mut Self {
        self.name = name.to_string();
        self
    }

    /// Alias of [`set_name`](Self::set_name).
    pub fn name(&mut self, name: impl ToString) -> &mut Self {
        self.set_name(name)
    }

    /// Overrides the inferred type without touching the contents.
    pub fn set_type(&mut self, array_type: ArrayType) -> &mut Self {
        self.array_type = Some(array_type);
        self
    }

    fn label(&self) -> &str {
        if self.name.is_empty() {
            "array"
        } else {
            &self.name
        }
    }

    // Accessors

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn array_type(&self) -> Option<ArrayType> {
        self.array_type
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.value
    }

    /// Numeric reading of every element; symbols that do not parse read as NaN.
    pub fn numbers(&self) -> Vec<f64> {
        self.value.iter().map(Value::as_f64).collect()
    }

    /// The snapshot taken at the first assignment.
    pub fn original_values(&self) -> Option<&[Value]> {
        self.original.as_deref()
    }

    /// Cached normalized view; empty unless the array is numeric.
    pub fn normalized(&self) -> &[f64] {
        &self.normalized
    }

    /// The histogram recorded by the last [`histo`](Self::histo), if any.
    pub fn histogram_analysis(&self) -> Option<&Histogram> {
        self.histogram.as_ref()
    }

    /// Distinct values: the cached classes when present, otherwise computed
    /// from the current contents.
    pub fn classes(&self) -> Vec<Value> {
        self.classes
            .clone()
            .unwrap_or_else(|| stats::classes(&self.value))
    }

    fn cached(&self, pick: impl Fn(&Summary) -> f64) -> f64 {
        self.summary.as_ref().map_or(f64::NAN, pick)
    }

    /// Cached minimum; NaN for non-numeric arrays.
    pub fn min(&self) -> f64 {
        self.cached(|s| s.min)
    }

    /// Cached maximum; NaN for non-numeric arrays.
    pub fn max(&self) -> f64 {
        self.cached(|s| s.max)
    }

    /// Cached mean; NaN for non-numeric arrays.
    pub fn mean(&self) -> f64 {
        self.cached(|s| s.mean)
    }

    /// Cached sample standard deviation; NaN for non-numeric arrays.
    pub fn std(&self) -> f64 {
        self.cached(|s| s.std)
    }

    pub fn pstd(&self) -> f64 {
        stats::pstd(&self.numbers())
    }

    pub fn variance(&self) -> f64 {
        stats::variance(&self.numbers())
    }

    pub fn pvariance(&self) -> f64 {
        stats::pvariance(&self.numbers())
    }

    pub fn median(&self) -> f64 {
        stats::median(&self.numbers())
    }

    pub fn mode(&self) -> f64 {
        stats::mode(&self.numbers())
    }

    pub fn midrange(&self) -> f64 {
        stats::midrange(&self.numbers())
    }

    // Cursor

    pub fn index(&self) -> usize {
        self.cursor.position()
    }

    pub fn current(&self) -> Option<&Value> {
        self.value.get(self.cursor.position())
    }

    /// Advances the cursor (wrapping) and returns the element under it.
    pub fn next_value(&mut self) -> Option<&Value> {
        let i = self.cursor.advance(self.value.len())?;
        self.value.get(i)
    }

    /// Steps the cursor back (wrapping) and returns the element under it.
    pub fn prev_value(&mut self) -> Option<&Value> {
        let i = self.cursor.retreat(self.value.len())?;
        self.value.get(i)
    }

    /// A uniformly random element. The cursor does not move.
    pub fn random_value(&mut self) -> Option<&Value> {
        let i = self.cursor.random(self.value.len(), &mut self.rng)?;
        self.value.get(i)
    }

    /// Element at `index`, wrapping out-of-range indices (negative ones
    /// included) with a logged warning. `None` only for an empty array.
    pub fn at(&self, index: i64) -> Option<&Value> {
        let len = self.value.len();
        if len == 0 {
            warn!("{}: index {} on an empty array", self.label(), index);
            return None;
        }

        if index < 0 || index as usize >= len {
            warn!(
                "{}: index {} out of range for length {}, wrapping",
                self.label(),
                index,
                len
            );
        }
        self.value.get(wrap_index(index, len))
    }

    // Query dispatch

    /// Answers a named query.
    ///
    /// Cursor queries move the cursor, which is why this takes `&mut self`.
    /// Traversal modes that are declared but unsupported return
    /// [`ArrayError::NotImplemented`].
    pub fn get(&mut self, query: Query) -> Result<QueryOutput> {
        let output = match query {
            Query::Name => QueryOutput::Text(self.name.clone()),
            Query::Type => QueryOutput::Type(self.array_type),
            Query::Length => QueryOutput::Count(self.len()),

            Query::Min => QueryOutput::Number(stats::min(&self.numbers())),
            Query::Max => QueryOutput::Number(stats::max(&self.numbers())),
            Query::Mean => QueryOutput::Number(stats::mean(&self.numbers())),
            Query::Mode => QueryOutput::Number(self.mode()),
            Query::Median => QueryOutput::Number(self.median()),
            Query::Midrange => QueryOutput::Number(self.midrange()),
            Query::Std => QueryOutput::Number(stats::std(&self.numbers())),
            Query::Pstd => QueryOutput::Number(self.pstd()),
            Query::Var => QueryOutput::Number(self.variance()),
            Query::Pvar => QueryOutput::Number(self.pvariance()),

            Query::Current => QueryOutput::Element(self.current().cloned()),
            Query::Next => QueryOutput::Element(self.next_value().cloned()),
            Query::Prev => QueryOutput::Element(self.prev_value().cloned()),
            Query::Random => QueryOutput::Element(self.random_value().cloned()),
            Query::Index => QueryOutput::Count(self.index()),
            Query::Traverse(mode) => {
                let len = self.value.len();
                let i = self.cursor.traverse(mode, len)?;
                QueryOutput::Element(self.value.get(i).cloned())
            }

            Query::Original => QueryOutput::Values(self.original.clone().unwrap_or_default()),
            Query::Normalized => {
                QueryOutput::Numbers(transform::normalize(&self.numbers(), None, None))
            }
            Query::Sorted => QueryOutput::Values(transform::sort(&self.value)),
            Query::Unique => QueryOutput::Values(transform::unique(&self.value)),
            Query::Classes => QueryOutput::Values(self.classes()),
            Query::NumClasses => QueryOutput::Count(self.classes().len()),
            Query::Histogram => QueryOutput::Histogram(
                self.histogram
                    .clone()
                    .unwrap_or_else(|| stats::histo(&self.value)),
            ),

            Query::Value => QueryOutput::Values(self.value.clone()),
        };

        Ok(output)
    }

    /// String form of [`get`](Self::get). Unknown keys answer the full value
    /// sequence.
    pub fn get_key(&mut self, key: &str) -> Result<QueryOutput> {
        self.get(Query::from_key(key))
    }
}

impl<T: Into<Value>> From<Vec<T>> for DataArray {
    fn from(items: Vec<T>) -> Self {
        let mut array = DataArray::new();
        array.assign(items.into_iter().map(Into::into).collect());
        array
    }
}

impl From<&DataArray> for Value {
    fn from(array: &DataArray) -> Self {
        Value::Collection(array.value.clone())
    }
}

impl PartialEq for DataArray {
    /// Arrays compare by name, type and contents; caches, cursor and random
    /// source are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.array_type == other.array_type
            && self.value.len() == other.value.len()
            && self.value.iter().zip(&other.value).all(|(a, b)| a.same_class(b))
    }
}

impl Validate for DataArray {
    /// Reports problems that the array tolerates silently: emptiness and
    /// non-finite numeric elements are warnings, never errors.
    fn validate(&self) -> ValidationResult {
        let mut warnings = Vec::new();
        let errors = Vec::new();

        if self.value.is_empty() {
            warnings.push(format!("{} is empty", self.label()));
        }

        if self.array_type == Some(ArrayType::Numeric) {
            let mut ignored = Vec::new();
            _chain(
                as_warnings(validate_finite(&self.numbers())),
                &mut warnings,
                &mut ignored,
            );
        }

        _return(warnings, errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_float_eq, assert_seq_eq};

    #[test]
    fn test_set_caches_statistics() {
        let mut array = DataArray::new();
        array.set(vec![1.0, 2.0, 3.0, 4.0]).unwrap();

        assert_eq!(array.len(), 4);
        assert_eq!(array.mean(), 2.5);
        assert_eq!(array.min(), 1.0);
        assert_eq!(array.max(), 4.0);
        assert_float_eq(array.std(), (5.0f64 / 3.0).sqrt(), 1e-12);
        assert_seq_eq(array.normalized(), &[0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0], 1e-12);
    }

    #[test]
    fn test_set_rejects_scalar() {
        let mut array = DataArray::new();
        assert!(matches!(array.set(3.0), Err(ArrayError::InvalidInput(_))));
        assert!(matches!(array.set("abc"), Err(ArrayError::InvalidInput(_))));
        assert!(array.original_values().is_none());
    }

    #[test]
    fn test_string_constructor_explodes() {
        let array = DataArray::from_value("abca", Some("letters")).unwrap();

        assert_eq!(array.len(), 4);
        assert_eq!(array.get_name(), "letters");
        assert_eq!(array.array_type(), Some(ArrayType::Nominal));
        assert_eq!(array.classes().len(), 3);
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let array = DataArray::from(vec!["1", "2.5", "x"]);

        assert_eq!(array.array_type(), Some(ArrayType::Numeric));
        assert_eq!(array.values()[1], Value::Number(2.5));
        assert!(array.values()[2].as_f64().is_nan());
        assert!(array.max().is_nan());
    }

    #[test]
    fn test_original_captured_once() {
        let mut array = DataArray::from(vec![1.0, 2.0]);
        array.set(vec![5.0, 6.0, 7.0]).unwrap();

        assert_eq!(array.original_values(), Some(&[Value::from(1.0), Value::from(2.0)][..]));
    }

    #[test]
    fn test_empty_set_keeps_type() {
        let mut array = DataArray::from(vec!["a", "b"]);
        array.set(Vec::<f64>::new()).unwrap();

        assert_eq!(array.len(), 0);
        assert_eq!(array.array_type(), Some(ArrayType::Nominal));
    }

    #[test]
    fn test_cursor_stays_in_range_after_shrink() {
        let mut array = DataArray::from(vec![1.0, 2.0, 3.0, 4.0]);
        array.next_value();
        array.next_value();
        array.next_value();
        array.set(vec![9.0, 8.0]).unwrap();

        assert_eq!(array.index(), 1);
        assert_eq!(array.current(), Some(&Value::from(8.0)));
    }

    #[test]
    fn test_at_wraps() {
        let array = DataArray::from(vec![1.0, 2.0, 3.0, 4.0]);

        assert_eq!(array.at(2), Some(&Value::from(3.0)));
        assert_eq!(array.at(-1), Some(&Value::from(4.0)));
        assert_eq!(array.at(9), Some(&Value::from(2.0)));
        assert_eq!(DataArray::new().at(0), None);
    }

    #[test]
    fn test_get_dispatch() {
        let mut array = DataArray::from(vec![3.0, 1.0, 3.0, 5.0]);
        array.set_name("melody");

        assert_eq!(array.get(Query::Name).unwrap(), QueryOutput::Text("melody".into()));
        assert_eq!(array.get(Query::Length).unwrap(), QueryOutput::Count(4));
        assert_eq!(array.get(Query::Mode).unwrap(), QueryOutput::Number(3.0));
        assert_eq!(array.get(Query::Median).unwrap(), QueryOutput::Number(3.0));
        assert_eq!(array.get(Query::Midrange).unwrap(), QueryOutput::Number(3.0));
        assert_eq!(array.get(Query::Pvar).unwrap(), QueryOutput::Number(2.0));
        assert_eq!(array.get(Query::NumClasses).unwrap(), QueryOutput::Count(3));
        assert_eq!(
            array.get(Query::Sorted).unwrap(),
            QueryOutput::Values(numbers(&[1.0, 3.0, 3.0, 5.0]))
        );
    }

    #[test]
    fn test_cursor_queries() {
        let mut array = DataArray::from(vec![10.0, 20.0, 30.0]);

        assert_eq!(array.get(Query::Current).unwrap(), QueryOutput::Element(Some(Value::from(10.0))));
        assert_eq!(array.get(Query::Prev).unwrap(), QueryOutput::Element(Some(Value::from(30.0))));
        assert_eq!(array.get(Query::Index).unwrap(), QueryOutput::Count(2));
        assert_eq!(array.get(Query::Next).unwrap(), QueryOutput::Element(Some(Value::from(10.0))));
    }

    #[test]
    fn test_traversal_queries_are_explicitly_unsupported() {
        let mut array = DataArray::from(vec![1.0]);
        assert!(matches!(
            array.get_key("palindrome"),
            Err(ArrayError::NotImplemented(_))
        ));
    }

    #[test]
    fn test_unknown_key_returns_value() {
        let mut array = DataArray::from(vec![1.0, 2.0]);
        assert_eq!(
            array.get_key("bogus").unwrap(),
            QueryOutput::Values(numbers(&[1.0, 2.0]))
        );
    }

    #[test]
    fn test_random_value_is_seeded() {
        let mut a = DataArray::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut b = a.clone();
        a.seed(42);
        b.seed(42);

        let picks_a: Vec<_> = (0..8).map(|_| a.random_value().cloned()).collect();
        let picks_b: Vec<_> = (0..8).map(|_| b.random_value().cloned()).collect();
        assert_eq!(picks_a, picks_b);
        assert_eq!(a.index(), 0);
    }

    #[test]
    fn test_clone_draws_its_own_random_stream() {
        let mut origin = DataArray::with_seed(3);
        origin.set((0..24).collect::<Vec<i32>>()).unwrap();

        let mut first = origin.clone();
        let mut second = origin.clone();
        origin.shuffle();
        first.shuffle();
        second.shuffle();

        assert_eq!(first.values(), second.values());
        assert_ne!(origin.values(), first.values());
    }

    #[test]
    fn test_validate_reports_nan_as_warning() {
        let array = DataArray::from(vec!["1", "oops"]);
        match array.validate() {
            ValidationResult::Warnings(_, warnings) => {
                assert!(warnings.iter().any(|w| w.contains("index 1")));
            }
            other => panic!("Expected warnings, got {:?}", other),
        }

        assert!(DataArray::from(vec![1.0]).validate().is_valid());
    }
}
