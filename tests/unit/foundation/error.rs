use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GridError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GridError::measurement("x")
            .to_string()
            .contains("measurement error:")
    );
    assert!(
        GridError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        GridError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("probe detached");
    let err = GridError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("probe detached"));
}

#[test]
fn anyhow_converts_with_question_mark() {
    fn inner() -> GridResult<()> {
        Err(anyhow::anyhow!("boom"))?;
        Ok(())
    }
    let err = inner().unwrap_err();
    assert!(matches!(err, GridError::Other(_)));
}
