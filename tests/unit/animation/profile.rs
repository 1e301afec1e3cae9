use super::*;

#[test]
fn sample_interpolates_between_endpoints() {
    let p = EasingProfile::new(Ease::Linear, 10.0, 20.0, 2.0);
    assert_eq!(p.sample(0.0), 10.0);
    assert_eq!(p.sample(1.0), 15.0);
    assert_eq!(p.sample(2.0), 20.0);
}

#[test]
fn sample_clamps_outside_segment() {
    let p = EasingProfile::new(Ease::InCubic, 15.0, 2.0, 0.2);
    assert_eq!(p.sample(-1.0), 15.0);
    assert_eq!(p.sample(5.0), 2.0);
}

#[test]
fn progress_clamps_raw_curve_value() {
    let linear = EasingProfile::new(Ease::Linear, 0.0, 1.0, 1.0);
    assert_eq!(linear.progress(1.5), 1.0);
    // Past its end the out-quad parabola turns back down; that raw value is inside [0, 1].
    let out_quad = EasingProfile::new(Ease::OutQuad, 0.0, 1.0, 1.0);
    assert_eq!(out_quad.progress(1.5), 0.75);
}

#[test]
fn zero_duration_jumps_to_target() {
    let p = EasingProfile::new(Ease::OutCubic, 1.0, 0.0, 0.0);
    assert_eq!(p.sample(0.0), 0.0);
}
