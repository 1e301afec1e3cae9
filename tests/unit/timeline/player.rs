use super::*;

fn s(time: f64, radius: f64, opacity: f64) -> TimelineSample {
    TimelineSample {
        time,
        radius,
        opacity,
        overlay_opacity: opacity,
    }
}

fn ramp(n: usize) -> TimelineBuffer {
    let mut samples: Vec<_> = (0..n)
        .map(|i| s(i as f64 * 0.1, i as f64, 0.5))
        .collect();
    let end = n as f64 * 0.1;
    samples.push(s(end, n as f64, 0.0));
    TimelineBuffer::from_samples(samples).unwrap()
}

#[test]
fn empty_slice_fails_fast() {
    let mut p = TimelinePlayer::new();
    let err = p.seek_samples(&[], 1.0).unwrap_err();
    assert!(matches!(err, ScanError::Timeline(_)));
}

#[test]
fn single_sample_is_returned_for_any_time() {
    let only = s(0.0, 3.0, 0.25);
    let buf = TimelineBuffer::from_samples(vec![only]).unwrap();
    let mut p = TimelinePlayer::new();
    for t in [-5.0, 0.0, 0.5, 100.0] {
        assert_eq!(p.seek(&buf, t), only);
    }
}

#[test]
fn boundary_queries_clamp_to_end_samples() {
    let buf = ramp(10);
    let mut p = TimelinePlayer::new();
    assert_eq!(p.seek(&buf, -1.0), *buf.first());
    assert_eq!(p.seek(&buf, 0.0), *buf.first());
    assert_eq!(p.seek(&buf, 50.0), *buf.last());
    assert_eq!(p.seek(&buf, buf.duration()), *buf.last());
    assert_eq!(p.seek(&buf, f64::NAN), *buf.first());
}

#[test]
fn interior_queries_interpolate_every_field() {
    let buf = ramp(10);
    let mut p = TimelinePlayer::new();
    let m = p.seek(&buf, 0.25);
    assert!((m.radius - 2.5).abs() < 1e-9);
    assert_eq!(m.time, 0.25);
    assert_eq!(m.opacity, 0.5);

    // Last bracket blends toward the zeroed terminal sample.
    let m = p.seek(&buf, 0.95);
    assert!((m.opacity - 0.25).abs() < 1e-9);
    assert!((m.overlay_opacity - 0.25).abs() < 1e-9);
}

#[test]
fn exact_sample_times_return_sample_values() {
    let buf = ramp(10);
    let mut p = TimelinePlayer::new();
    for (i, sample) in buf.samples().iter().enumerate().skip(1).take(8) {
        let got = p.seek(&buf, sample.time);
        assert!((got.radius - i as f64).abs() < 1e-9, "sample {i}: {got:?}");
    }
}

#[test]
fn sequential_playback_advances_hint() {
    let buf = ramp(100);
    let mut p = TimelinePlayer::new();
    let mut last = 0;
    for k in 1..990 {
        let t = k as f64 * 0.01;
        p.seek(&buf, t);
        assert!(p.last_index() >= last);
        last = p.last_index();
    }
    assert!(last >= 97);
}

#[test]
fn backward_and_long_jumps_match_cold_lookup() {
    let buf = ramp(200);
    let mut warm = TimelinePlayer::new();
    for t in [0.05, 15.0, 3.33, 19.9, 0.11, 7.77, 7.78, 0.0001] {
        let mut cold = TimelinePlayer::new();
        let a = warm.seek(&buf, t);
        let b = cold.seek(&buf, t);
        assert_eq!(a, b, "t={t}");
        assert!((a.radius - t * 10.0).abs() < 1e-6, "t={t}: {a:?}");
    }
}

#[test]
fn hint_from_another_buffer_is_tolerated() {
    let long = ramp(200);
    let short = ramp(3);
    let mut p = TimelinePlayer::new();
    p.seek(&long, 19.0);
    let m = p.seek(&short, 0.15);
    assert!((m.radius - 1.5).abs() < 1e-9);
}

#[test]
fn playback_scales_time() {
    let buf = Arc::new(ramp(10));
    let mut pb = TimelinePlayback::with_time_scale(Arc::clone(&buf), 0.5).unwrap();
    assert_eq!(pb.time_scale(), 0.5);
    assert!(Arc::ptr_eq(pb.buffer(), &buf));
    assert_eq!(TimelinePlayback::new(buf).time_scale(), 1.0);
    assert_eq!(pb.current().radius, 0.0);
    let m = pb.advance(0.4);
    assert!((pb.time() - 0.2).abs() < 1e-12);
    assert!((m.radius - 2.0).abs() < 1e-9);
    assert!(!pb.is_finished());
    pb.advance(10.0);
    assert!(pb.is_finished());
    assert_eq!(pb.current().opacity, 0.0);

    pb.restart();
    assert_eq!(pb.time(), 0.0);
    assert_eq!(pb.current().radius, 0.0);
}

#[test]
fn playback_rejects_bad_time_scale() {
    let buf = Arc::new(ramp(3));
    assert!(TimelinePlayback::with_time_scale(buf.clone(), 0.0).is_err());
    assert!(TimelinePlayback::with_time_scale(buf.clone(), -1.0).is_err());
    assert!(TimelinePlayback::with_time_scale(buf, f64::INFINITY).is_err());
}
