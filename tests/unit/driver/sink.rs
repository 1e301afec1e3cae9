use super::*;

#[test]
fn latest_write_wins_and_kinds_are_distinct() {
    let mut sink = RecordingSink::new();
    sink.set_float("a", 1.0);
    sink.set_float("a", 2.0);
    sink.set_vector("v", Vec3::Y);

    assert_eq!(sink.float("a"), Some(2.0));
    assert_eq!(sink.vector("a"), None);
    assert_eq!(sink.vector("v"), Some(Vec3::Y));
    assert_eq!(sink.float("missing"), None);
    assert_eq!(sink.write_count("a"), 2);
    assert_eq!(sink.writes().len(), 3);

    sink.clear();
    assert!(sink.writes().is_empty());
}
