//! # Array elements and type inference
//!
//! An array holds [`Value`]s: numbers, symbols, or nested collections. The
//! array's [`ArrayType`] is inferred from its first element, the same way for
//! every `set`:
//!
//! | First element                   | Inferred type           |
//! |---------------------------------|-------------------------|
//! | `Number(_)` (NaN included)      | [`ArrayType::Numeric`]  |
//! | `Symbol` that parses as a float | [`ArrayType::Numeric`]  |
//! | any other `Symbol`              | [`ArrayType::Nominal`]  |
//! | `Collection(_)`                 | [`ArrayType::Collection`] |
//!
//! ```rust
//! use seqarray::value::{ArrayType, Value, classify};
//!
//! assert_eq!(classify(&[Value::from("3.5"), Value::from("x")]), Some(ArrayType::Numeric));
//! assert_eq!(classify(&[Value::from("c"), Value::from(1.0)]), Some(ArrayType::Nominal));
//! assert_eq!(classify(&[]), None);
//! ```

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::WithWarnings;

/// A single array element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Symbol(String),
    Collection(Vec<Value>),
}

impl Value {
    /// Numeric reading of this element.
    ///
    /// Symbols are parsed after trimming whitespace; anything that does not
    /// parse, and every collection, reads as NaN.
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Symbol(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
            Value::Collection(_) => f64::NAN,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// The type an array would take if this were its first element.
    pub fn kind(&self) -> ArrayType {
        match self {
            Value::Number(_) => ArrayType::Numeric,
            Value::Symbol(s) if s.trim().parse::<f64>().is_ok() => ArrayType::Numeric,
            Value::Symbol(_) => ArrayType::Nominal,
            Value::Collection(_) => ArrayType::Collection,
        }
    }

    /// Equality used for classes, histograms and de-duplication.
    ///
    /// Unlike `==`, NaN is the same class as NaN.
    pub fn same_class(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Collection(a), Value::Collection(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_class(y))
            }
            _ => self == other,
        }
    }

    /// Total order used by `sort`: numbers ascending (NaN last), then symbols
    /// lexicographically, then collections element-wise.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Value::Symbol(a), Value::Symbol(b)) => a.cmp(b),
            (Value::Collection(a), Value::Collection(b)) => a
                .iter()
                .zip(b)
                .map(|(x, y)| x.sort_cmp(y))
                .find(|o| o.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Number(_) => 0,
            Value::Symbol(_) => 1,
            Value::Collection(_) => 2,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Collection(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i32, i64, u8, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Symbol(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Symbol(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Symbol(c.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Collection(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Collection(items.iter().cloned().map(Into::into).collect())
    }
}

/// Wraps plain numbers as array elements.
pub fn numbers(values: &[f64]) -> Vec<Value> {
    values.iter().copied().map(Value::Number).collect()
}

/// Splits a string into single-character symbols.
pub fn explode(s: &str) -> Vec<Value> {
    s.chars().map(Value::from).collect()
}

/// Infers the array type from the first element. `None` for an empty sequence.
pub fn classify(values: &[Value]) -> Option<ArrayType> {
    values.first().map(Value::kind)
}

/// Reads every element as a float. Elements that cannot be read become NaN
/// and are reported as warnings.
pub fn coerce_numeric(values: &[Value]) -> WithWarnings<Vec<f64>, String> {
    let mut warnings = Vec::new();
    let coerced = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let n = v.as_f64();
            if n.is_nan() && !matches!(v, Value::Number(_)) {
                warnings.push(format!("element {} ('{}') is not numeric, using NaN", i, v));
            }
            n
        })
        .collect();

    WithWarnings::from_parts(coerced, warnings)
}

/// The inferred type of an array's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayType {
    /// Floating point data; statistics and the normalized view are cached.
    Numeric,
    /// Symbolic data, e.g. note names or single characters.
    Nominal,
    /// Elements that are themselves sequences.
    Collection,
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayType::Numeric => write!(f, "numeric"),
            ArrayType::Nominal => write!(f, "nominal"),
            ArrayType::Collection => write!(f, "collection"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ArrayTypeParseError {
    #[error("Invalid ArrayType: {0}")]
    InvalidValue(String),
}

impl FromStr for ArrayType {
    type Err = ArrayTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numeric" | "number" | "int" | "float" => Ok(ArrayType::Numeric),
            "nominal" | "string" | "symbol" => Ok(ArrayType::Nominal),
            "collection" | "coll" => Ok(ArrayType::Collection),
            _ => Err(ArrayTypeParseError::InvalidValue(s.to_string())),
        }
    }
}
