use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CurvecastError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        CurvecastError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        CurvecastError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(CurvecastError::io("x").to_string().contains("io error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CurvecastError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
