use seqarray::{
    DataArray, Scale,
    transform::rhythm::{validate_beats, validate_intervals, validate_notes},
    types::{Validate, ValidationResult},
};

#[test]
fn test_array_with_unreadable_element_warns() {
    let mut data = DataArray::new();
    data.set(vec!["60", "sixty-two", "64"]).unwrap();

    let result = data.validate();
    assert!(!result.is_invalid());
    if let ValidationResult::Warnings(_, warnings) = result {
        assert!(warnings.iter().any(|w| w.contains("index 1")));
    } else {
        panic!("Expected Warnings result");
    }
}

#[test]
fn test_empty_array_warns() {
    let data = DataArray::new();
    assert!(matches!(data.validate(), ValidationResult::Warnings(_, _)));
}

#[test]
fn test_named_scales_validate() {
    for name in ["chromatic", "major", "harmonic minor", "whole-tone", "blues"] {
        let scale = Scale::named(name).unwrap();
        assert!(scale.validate().is_valid(), "{} should be valid", name);
    }
}

#[test]
fn test_rhythm_inputs() {
    assert!(validate_notes(&[4.0, 8.0, 16.0], 16).is_valid());
    assert!(validate_notes(&[3.0], 16).is_invalid());
    assert!(validate_intervals(&[2.0, 1.0, 3.0]).is_valid());
    assert!(validate_intervals(&[0.0]).is_invalid());
    assert!(validate_beats(&[1.0, 0.0, 1.0]).is_valid());

    let leading_rest = validate_beats(&[0.0, 1.0]);
    assert!(!leading_rest.is_valid());
    assert!(!leading_rest.is_invalid());
}
