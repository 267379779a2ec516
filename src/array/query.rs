//! Named queries accepted by [`DataArray::get`](super::DataArray::get).

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{cursor::TraversalMode, stats::Histogram, value::{ArrayType, Value}};

/// Every named query an array answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    // Identity
    Name,
    Type,
    Length,

    // Statistics
    Min,
    Max,
    Mean,
    Mode,
    Median,
    Midrange,
    Std,
    Pstd,
    Var,
    Pvar,

    // Cursor
    Current,
    Next,
    Prev,
    Random,
    Index,
    Traverse(TraversalMode),

    // Views
    Original,
    Normalized,
    Sorted,
    Unique,
    Classes,
    NumClasses,
    Histogram,

    /// The live value sequence.
    Value,
}

impl Query {
    /// Parses a key, answering [`Query::Value`] for anything unrecognised.
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or(Query::Value)
    }
}

#[derive(Debug, Error)]
pub enum QueryParseError {
    #[error("Unknown query: {0}")]
    Unknown(String),
}

impl FromStr for Query {
    type Err = QueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let query = match s {
            "name" | "key" => Query::Name,
            "type" => Query::Type,
            "len" | "length" => Query::Length,

            "minimum" | "min" => Query::Min,
            "maximum" | "max" => Query::Max,
            "mean" | "average" | "avg" => Query::Mean,
            "mode" => Query::Mode,
            "median" => Query::Median,
            "midrange" => Query::Midrange,
            "standardDeviation" | "std" => Query::Std,
            "pstd" => Query::Pstd,
            "variance" | "var" => Query::Var,
            "populationVariance" | "pvar" => Query::Pvar,

            "current" | "curr" | "cur" | "now" | "moment" => Query::Current,
            "next" => Query::Next,
            "prev" | "previous" => Query::Prev,
            "random" => Query::Random,
            "index" | "idx" => Query::Index,
            "palindrome" => Query::Traverse(TraversalMode::Palindrome),
            "urn" => Query::Traverse(TraversalMode::Urn),
            "relative" | "location" | "loc" => Query::Traverse(TraversalMode::Relative),

            "original" => Query::Original,
            "normal" | "normalize" | "normalized" => Query::Normalized,
            "sorted" | "sort" => Query::Sorted,
            "uniques" | "unique" | "uniq" => Query::Unique,
            "classes" => Query::Classes,
            "numClasses" => Query::NumClasses,
            "histogram" | "histo" => Query::Histogram,
            "value" => Query::Value,

            _ => return Err(QueryParseError::Unknown(s.to_string())),
        };
        Ok(query)
    }
}

/// Answer to a [`Query`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutput {
    Text(String),
    Type(Option<ArrayType>),
    Count(usize),
    Number(f64),
    /// A single element; `None` when the array is empty.
    Element(Option<Value>),
    Values(Vec<Value>),
    Numbers(Vec<f64>),
    Histogram(Histogram),
}

impl QueryOutput {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            QueryOutput::Number(n) => Some(*n),
            QueryOutput::Count(n) => Some(*n as f64),
            QueryOutput::Element(Some(v)) => Some(v.as_f64()),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<usize> {
        match self {
            QueryOutput::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn into_values(self) -> Option<Vec<Value>> {
        match self {
            QueryOutput::Values(values) => Some(values),
            QueryOutput::Numbers(numbers) => Some(crate::value::numbers(&numbers)),
            _ => None,
        }
    }
}

impl fmt::Display for QueryOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutput::Text(s) => write!(f, "{}", s),
            QueryOutput::Type(Some(t)) => write!(f, "{}", t),
            QueryOutput::Type(None) => write!(f, "untyped"),
            QueryOutput::Count(n) => write!(f, "{}", n),
            QueryOutput::Number(n) => write!(f, "{}", n),
            QueryOutput::Element(Some(v)) => write!(f, "{}", v),
            QueryOutput::Element(None) => write!(f, "none"),
            QueryOutput::Values(values) => write!(f, "{}", Value::Collection(values.clone())),
            QueryOutput::Numbers(numbers) => {
                write!(f, "{}", Value::Collection(crate::value::numbers(numbers)))
            }
            QueryOutput::Histogram(h) => {
                let pairs: Vec<String> = h.iter().map(|(c, n)| format!("{}: {}", c, n)).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
        }
    }
}
