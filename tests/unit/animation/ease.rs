use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.evaluate(0.0, 2.0), 0.0);
        assert_eq!(ease.evaluate(2.0, 2.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn zero_duration_completes_immediately() {
    for ease in Ease::ALL {
        assert_eq!(ease.evaluate(0.0, 0.0), 1.0);
        assert_eq!(ease.evaluate(-3.0, 0.0), 1.0);
    }
}

#[test]
fn evaluate_does_not_clamp() {
    // Past the end, in-curves keep growing and the out-quad parabola turns back down.
    assert_eq!(Ease::InQuad.evaluate(2.0, 1.0), 4.0);
    assert_eq!(Ease::Linear.evaluate(-1.0, 1.0), -1.0);
    assert_eq!(Ease::OutQuad.evaluate(2.0, 1.0), 0.0);
    // The clamped form pins both ends.
    assert_eq!(Ease::InQuad.apply(2.0), 1.0);
    assert_eq!(Ease::Linear.apply(-1.0), 0.0);
}

#[test]
fn in_quart_matches_power() {
    assert!((Ease::InQuart.evaluate(0.1, 0.2) - 0.0625).abs() < 1e-12);
}

#[test]
fn deserializes_from_variant_name() {
    let e: Ease = serde_json::from_str("\"InOutQuad\"").unwrap();
    assert_eq!(e, Ease::InOutQuad);
}
