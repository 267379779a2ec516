//! Element-wise arithmetic.

pub fn add(values: &[f64], amount: f64) -> Vec<f64> {
    values.iter().map(|v| v + amount).collect()
}

pub fn mult(values: &[f64], factor: f64) -> Vec<f64> {
    values.iter().map(|v| v * factor).collect()
}

/// Rounds half away from zero.
pub fn round(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| v.round()).collect()
}

pub fn floor(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| v.floor()).collect()
}

pub fn ceil(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| v.ceil()).collect()
}

/// Half-wave rectification: negative values become zero.
pub fn hwr(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|&v| if v < 0.0 { 0.0 } else { v })
        .collect()
}

/// Full-wave rectification: absolute values.
pub fn fwr(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| v.abs()).collect()
}
