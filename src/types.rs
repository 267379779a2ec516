/// A result type that can contain warnings alongside the successful result.
///
/// Used where an operation always succeeds but may have degraded part of its
/// input on the way, e.g. numeric coercion that turned a symbol into NaN.
///
/// # Examples
///
/// ```rust
/// use seqarray::types::WithWarnings;
///
/// let result = WithWarnings::Warning(vec![1.0, f64::NAN], vec!["index 1 is not numeric".to_string()]);
/// assert!(result.is_warning());
///
/// let (values, warnings): (Vec<f64>, Vec<String>) = result.into();
/// assert_eq!(values.len(), 2);
/// assert_eq!(warnings.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum WithWarnings<T, W> {
    /// Successful result without warnings
    Ok(T),
    /// Successful result with warnings
    Warning(T, Vec<W>),
}

impl<T, W> WithWarnings<T, W> {
    /// Wraps `data`, attaching `warnings` only if there are any.
    pub fn from_parts(data: T, warnings: Vec<W>) -> Self {
        if warnings.is_empty() {
            WithWarnings::Ok(data)
        } else {
            WithWarnings::Warning(data, warnings)
        }
    }

    /// Checks if the result is successful without warnings.
    pub fn is_ok(&self) -> bool {
        matches!(self, WithWarnings::Ok(_))
    }

    /// Checks if the result has warnings.
    pub fn is_warning(&self) -> bool {
        matches!(self, WithWarnings::Warning(_, _))
    }

    /// Extracts the result value, discarding any warnings.
    pub fn unwrap(self) -> T {
        match self {
            WithWarnings::Ok(data) => data,
            WithWarnings::Warning(data, _) => data,
        }
    }

    /// Extracts the warnings, discarding the result value.
    pub fn warnings(self) -> Vec<W> {
        match self {
            WithWarnings::Ok(_) => Vec::new(),
            WithWarnings::Warning(_, warnings) => warnings,
        }
    }
}

impl<T, W> From<WithWarnings<T, W>> for (T, Vec<W>) {
    fn from(value: WithWarnings<T, W>) -> Self {
        match value {
            WithWarnings::Ok(data) => (data, Vec::new()),
            WithWarnings::Warning(data, warnings) => (data, warnings),
        }
    }
}

/// Outcome of a [`Validate`] check.
///
/// `Invalid` still carries the warnings gathered before the first error so
/// callers can report everything in one go.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T = (), W = String, E = String> {
    /// No issues found.
    Valid(T),
    /// Usable, but something looks off.
    Warnings(T, Vec<W>),
    /// Not usable: `(warnings, errors)`.
    Invalid(Vec<W>, Vec<E>),
}

impl<T, W, E> ValidationResult<T, W, E> {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ValidationResult::Invalid(_, _))
    }

    /// Errors reported by an `Invalid` result, empty otherwise.
    pub fn errors(&self) -> &[E] {
        match self {
            ValidationResult::Invalid(_, errors) => errors,
            _ => &[],
        }
    }

    /// Warnings reported by a `Warnings` or `Invalid` result, empty otherwise.
    pub fn warnings(&self) -> &[W] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Warnings(_, warnings) => warnings,
            ValidationResult::Invalid(warnings, _) => warnings,
        }
    }
}

/// Types that can check their own well-formedness.
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}
