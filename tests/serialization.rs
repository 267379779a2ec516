use pretty_assertions::assert_eq;

use seqarray::{ArrayType, Scale, Value, stats, value::explode};

#[test]
fn test_value_untagged_json() -> anyhow::Result<()> {
    let values = vec![Value::from(1.5), Value::from("c"), Value::from(vec![1.0, 2.0])];
    let json = serde_json::to_string(&values)?;

    assert_eq!(json, r#"[1.5,"c",[1.0,2.0]]"#);

    let parsed: Vec<Value> = serde_json::from_str(&json)?;
    assert_eq!(parsed, values);
    Ok(())
}

#[test]
fn test_array_type_lowercase() {
    assert_eq!(serde_json::to_string(&ArrayType::Nominal).unwrap(), r#""nominal""#);

    let parsed: ArrayType = serde_json::from_str(r#""collection""#).unwrap();
    assert_eq!(parsed, ArrayType::Collection);
}

#[test]
fn test_histogram_and_scale_carry_over_json() {
    let histogram = stats::histo(&explode("abba"));
    let json = serde_json::to_string(&histogram).unwrap();
    let parsed: stats::Histogram = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, histogram);

    let scale = Scale::named("blues").unwrap();
    let parsed: Scale = serde_json::from_str(&serde_json::to_string(&scale).unwrap()).unwrap();
    assert_eq!(parsed.degrees(), scale.degrees());
}
