use super::*;

#[test]
fn sample_rate_rejects_zero() {
    assert!(SampleRate::new(0).is_err());
    assert_eq!(SampleRate::new(240).unwrap().hz(), 240);
}

#[test]
fn sample_time_is_multiplicative() {
    let rate = SampleRate::new(240).unwrap();
    assert_eq!(rate.sample_time(0), 0.0);
    assert_eq!(rate.sample_time(240), 1.0);
    assert_eq!(rate.sample_time(48), 0.2);
}

#[test]
fn planar_direction_drops_vertical_component() {
    let d = planar_direction(Vec3::new(3.0, 10.0, 4.0)).unwrap();
    assert_eq!(d.y, 0.0);
    assert!((d.length() - 1.0).abs() < 1e-12);
    assert!((d.x - 0.6).abs() < 1e-12);
    assert!((d.z - 0.8).abs() < 1e-12);
}

#[test]
fn planar_direction_of_vertical_vector_is_none() {
    assert!(planar_direction(Vec3::new(0.0, 1.0, 0.0)).is_none());
    assert!(planar_direction(Vec3::ZERO).is_none());
}
