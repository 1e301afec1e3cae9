use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScanError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        ScanError::timeline("x")
            .to_string()
            .contains("timeline error:")
    );
    assert!(
        ScanError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        ScanError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScanError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
