//! Names of the renderer parameters written by [`crate::ScanDriver`].

/// Current ring radius, written every tick.
pub const SCAN_RADIUS: &str = "scan_radius";
/// Primary effect opacity, written every tick.
pub const SCAN_OPACITY: &str = "scan_opacity";
/// Backdrop overlay opacity, written every tick.
pub const SCAN_OVERLAY_OPACITY: &str = "scan_overlay_opacity";
/// World-space origin of the activation, written every tick.
pub const SCAN_ORIGIN: &str = "scan_origin";
/// Planar unit direction of the activation, written every tick.
pub const SCAN_DIRECTION_XZ: &str = "scan_direction_xz";
/// Full cone angle in degrees, written on restart.
pub const SCAN_MAX_ANGLE: &str = "scan_max_angle";
