#![cfg(feature = "serde")]

use float_range::FloatRange;

#[test]
fn round_trip() -> anyhow::Result<()> {
    let r = FloatRange::new(8., -2.5);
    let json = serde_json::to_string(&r)?;
    assert_eq!(r#"{"value_a":8.0,"value_b":-2.5}"#, json);

    let de: FloatRange = serde_json::from_str(&json)?;
    assert_eq!(r, de);
    assert_eq!(8., de.value_a());
    assert_eq!(-2.5, de.value_b());
    Ok(())
}

#[test]
fn deserialize_swapped() -> anyhow::Result<()> {
    let de: FloatRange = serde_json::from_str(r#"{"value_a":-2.5,"value_b":8.0}"#)?;
    assert_eq!(FloatRange::new(8., -2.5), de);
    Ok(())
}
