use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = ScanConfig::default();
    cfg.validate().unwrap();
    assert!((cfg.total_duration() - 3.0).abs() < 1e-12);
}

#[test]
fn rejects_non_positive_durations() {
    let patches: [fn(&mut ScanConfig); 3] = [
        |c| c.durations.spawn = 0.0,
        |c| c.durations.prewarm = -1.0,
        |c| c.durations.expand = f64::NAN,
    ];
    for patch in patches {
        let mut cfg = ScanConfig::default();
        patch(&mut cfg);
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ScanError::Config(_)), "{err}");
    }
}

#[test]
fn rejects_max_velocity_below_final() {
    let cfg = ScanConfig {
        expansion_max_velocity: 4.0,
        expansion_final_velocity: 5.0,
        ..ScanConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("expansion_max_velocity"));
}

#[test]
fn rejects_sub_windows_longer_than_expand() {
    let cfg = ScanConfig {
        fade_out_duration: 3.0,
        ..ScanConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = ScanConfig {
        overlay_fade_duration: -0.1,
        ..ScanConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_out_of_range_opacity() {
    let cfg = ScanConfig {
        spawn_final_opacity: 1.5,
        ..ScanConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn partial_json_overrides_defaults() {
    let cfg = ScanConfig::from_json_str(
        r#"{ "durations": { "expand": 4.0 }, "fade_out_ease": "Linear" }"#,
    )
    .unwrap();
    assert_eq!(cfg.durations.expand, 4.0);
    assert_eq!(cfg.durations.spawn, 0.2);
    assert_eq!(cfg.fade_out_ease, Ease::Linear);
    assert_eq!(cfg.expansion_max_velocity, 300.0);
}

#[test]
fn json_errors_are_serde_errors() {
    let err = ScanConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ScanError::Serde(_)));
}

#[test]
fn json_is_validated_after_parse() {
    let err = ScanConfig::from_json_str(r#"{ "durations": { "spawn": 0.0 } }"#).unwrap_err();
    assert!(matches!(err, ScanError::Config(_)));
}

#[test]
fn missing_file_is_wrapped() {
    let err = ScanConfig::from_path("/definitely/not/here/scan.json").unwrap_err();
    assert!(matches!(err, ScanError::Other(_)));
    assert!(err.to_string().contains("open scan config"));
}

#[test]
fn profiles_follow_config() {
    let cfg = ScanConfig::default();
    let p = cfg.profiles();
    assert_eq!(p.spawn_velocity.from, 15.0);
    assert_eq!(p.spawn_velocity.to, 2.0);
    assert_eq!(p.expand_accelerate.to, 300.0);
    assert!((p.expand_decelerate.duration - 2.2).abs() < 1e-12);
    assert!((p.fade_out_start - 0.8).abs() < 1e-12);
    assert_eq!(p.overlay_fade_out.from, 1.0);
    assert_eq!(p.overlay_fade_out.to, 0.0);
}
