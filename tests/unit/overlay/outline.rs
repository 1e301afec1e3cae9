use std::sync::Arc;

use super::*;
use crate::scan::activation::{ScanActivation, ScanSettings};

fn started(forward: Vec3) -> ScanEvent {
    let settings = ScanSettings {
        max_angle: 90.0,
        activation_range: 10.0,
        active_duration: 5.0,
    };
    ScanEvent::Started(Arc::new(
        ScanActivation::new(Vec3::ZERO, forward, &settings).unwrap(),
    ))
}

#[test]
fn highlights_only_inside_range_and_cone() {
    let mut near_front = OutlineSwitch::new(Vec3::new(0.0, 0.0, 5.0));
    let mut far_front = OutlineSwitch::new(Vec3::new(0.0, 0.0, 50.0));
    let mut near_behind = OutlineSwitch::new(Vec3::new(0.0, 0.0, -5.0));

    let ev = started(Vec3::Z);
    assert!(near_front.handle(&ev));
    assert!(!far_front.handle(&ev));
    assert!(!near_behind.handle(&ev));
}

#[test]
fn end_reverts_and_retrigger_reevaluates() {
    let mut s = OutlineSwitch::new(Vec3::new(0.0, 0.0, 5.0));
    s.handle(&started(Vec3::Z));
    assert!(s.is_highlighted());

    s.handle(&started(Vec3::NEG_Z));
    assert!(!s.is_highlighted());

    s.handle(&started(Vec3::Z));
    s.handle(&ScanEvent::Ended);
    assert!(!s.is_highlighted());
}
