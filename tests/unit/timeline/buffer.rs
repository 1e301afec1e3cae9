use super::*;

fn s(time: f64, radius: f64) -> TimelineSample {
    TimelineSample {
        time,
        radius,
        opacity: 0.5,
        overlay_opacity: 1.0,
    }
}

#[test]
fn empty_buffer_is_rejected() {
    let err = TimelineBuffer::from_samples(vec![]).unwrap_err();
    assert!(matches!(err, ScanError::Timeline(_)));
}

#[test]
fn non_increasing_times_are_rejected() {
    assert!(TimelineBuffer::from_samples(vec![s(0.0, 0.0), s(0.0, 1.0)]).is_err());
    assert!(TimelineBuffer::from_samples(vec![s(0.0, 0.0), s(1.0, 1.0), s(0.5, 2.0)]).is_err());
}

#[test]
fn non_finite_fields_are_rejected() {
    assert!(TimelineBuffer::from_samples(vec![s(0.0, f64::NAN)]).is_err());
    assert!(TimelineBuffer::from_samples(vec![s(0.0, 0.0), s(f64::INFINITY, 1.0)]).is_err());
}

#[test]
fn accessors_report_bounds() {
    let buf = TimelineBuffer::from_samples(vec![s(0.0, 1.0), s(0.5, 2.0), s(2.0, 3.0)]).unwrap();
    assert_eq!(buf.len(), 3);
    assert!(!buf.is_empty());
    assert_eq!(buf.first().radius, 1.0);
    assert_eq!(buf.last().radius, 3.0);
    assert_eq!(buf.duration(), 2.0);
}

#[test]
fn sample_lerp_is_field_wise() {
    let a = TimelineSample {
        time: 0.0,
        radius: 0.0,
        opacity: 1.0,
        overlay_opacity: 0.0,
    };
    let b = TimelineSample {
        time: 2.0,
        radius: 10.0,
        opacity: 0.0,
        overlay_opacity: 1.0,
    };
    let m = TimelineSample::lerp(&a, &b, 0.5);
    assert_eq!(m.time, 1.0);
    assert_eq!(m.radius, 5.0);
    assert_eq!(m.opacity, 0.5);
    assert_eq!(m.overlay_opacity, 0.5);
}
