use super::*;

#[test]
fn active_duration_includes_safety_cycle() {
    let clock = IconCycleClock::new(CycleSettings::icon_pulse()).unwrap();
    assert_eq!(clock.settings(), &CycleSettings::icon_pulse());
    // (6 + 1) cycles of 4.15 s.
    assert!((clock.active_duration() - 29.05).abs() < 1e-9);
}

#[test]
fn completes_exactly_once() {
    let mut clock = IconCycleClock::new(CycleSettings::icon_pulse()).unwrap();
    assert!(!clock.advance(100.0));

    clock.start();
    assert!(!clock.advance(29.0));
    assert!(clock.is_running());
    assert!(clock.advance(0.1));
    assert!(!clock.is_running());
    assert!(!clock.advance(1.0));
}
