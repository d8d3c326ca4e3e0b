use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WispError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(WispError::render("x").to_string().contains("render error:"));
    assert!(WispError::encode("x").to_string().contains("encode error:"));
    assert!(
        WispError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn io_and_other_preserve_source() {
    let err = WispError::from(std::io::Error::other("disk full"));
    assert!(err.to_string().contains("disk full"));

    let base = std::io::Error::other("boom");
    let err = WispError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
