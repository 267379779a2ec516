use std::fmt;

use crate::types::ValidationResult;

pub fn _chain<T>(
    result: ValidationResult<T>,
    warnings: &mut Vec<String>,
    errors: &mut Vec<String>,
) {
    match result {
        ValidationResult::Valid(_) => {}
        ValidationResult::Warnings(_, warns) => {
            warnings.extend(warns);
        }
        ValidationResult::Invalid(warns, errs) => {
            warnings.extend(warns);
            errors.extend(errs);
        }
    }
}

pub fn _return(warnings: Vec<String>, errors: Vec<String>) -> ValidationResult {
    if !errors.is_empty() {
        ValidationResult::Invalid(warnings, errors)
    } else if !warnings.is_empty() {
        ValidationResult::Warnings((), warnings)
    } else {
        ValidationResult::Valid(())
    }
}

pub fn validate_ascending<V: PartialOrd + fmt::Display>(points: &[V]) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    for i in 1..points.len() {
        if points[i] < points[i - 1] {
            errors.push(format!(
                "values are not in ascending order: {} > {} at index {}",
                points[i - 1],
                points[i],
                i
            ));
        }
    }

    _return(warnings, errors)
}

pub fn validate_non_empty<V>(points: &[V]) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    if points.is_empty() {
        errors.push("values cannot be empty.".to_string());
    }

    _return(warnings, errors)
}

pub fn validate_finite(points: &[f64]) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    for (i, &value) in points.iter().enumerate() {
        if !value.is_finite() {
            errors.push(format!(
                "value at index {} is not a valid number: {}",
                i, value
            ));
        }
    }

    _return(warnings, errors)
}

/// Demotes every error of `result` to a warning.
pub fn as_warnings(result: ValidationResult) -> ValidationResult {
    match result {
        ValidationResult::Invalid(mut warnings, errors) => {
            warnings.extend(errors);
            ValidationResult::Warnings((), warnings)
        }
        other => other,
    }
}
