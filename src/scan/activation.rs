use crate::foundation::{
    core::{Vec3, planar_direction},
    error::{ScanError, ScanResult},
};

/// Slack on the cone test so positions exactly on the spread direction pass at `max_angle = 0`.
const ANGLE_EPSILON: f64 = 1e-9;

/// Per-trigger parameters the scan-origin authority stamps onto every activation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Full cone aperture in degrees, centred on the spread direction.
    pub max_angle: f64,
    /// Distance from the origin inside which objects react to the scan.
    pub activation_range: f64,
    /// Seconds the activation stays current before the end notification.
    pub active_duration: f64,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            max_angle: 145.0,
            activation_range: 45.0,
            active_duration: 15.0,
        }
    }
}

impl ScanSettings {
    /// Reject angles outside `[0, 360]` and negative ranges or durations.
    pub fn validate(&self) -> ScanResult<()> {
        if !self.max_angle.is_finite() || !(0.0..=360.0).contains(&self.max_angle) {
            return Err(ScanError::config(format!(
                "max_angle must be in [0, 360] degrees (got {})",
                self.max_angle
            )));
        }
        if !self.activation_range.is_finite() || self.activation_range < 0.0 {
            return Err(ScanError::config(format!(
                "activation_range must be finite and >= 0 (got {})",
                self.activation_range
            )));
        }
        if !self.active_duration.is_finite() || self.active_duration < 0.0 {
            return Err(ScanError::config(format!(
                "active_duration must be finite and >= 0 (got {})",
                self.active_duration
            )));
        }
        Ok(())
    }
}

/// Immutable snapshot of one triggered scan.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScanActivation {
    origin: Vec3,
    direction: Vec3,
    max_angle: f64,
    activation_range: f64,
    active_duration: f64,
    cos_half_angle: f64,
}

impl ScanActivation {
    /// Build an activation at `origin` spreading along `forward` flattened onto the XZ plane.
    ///
    /// Fails when `forward` has no planar component or `settings` are invalid.
    pub fn new(origin: Vec3, forward: Vec3, settings: &ScanSettings) -> ScanResult<Self> {
        settings.validate()?;
        if !origin.is_finite() {
            return Err(ScanError::geometry("scan origin must be finite"));
        }
        let direction = planar_direction(forward).ok_or_else(|| {
            ScanError::geometry("scan forward vector has no horizontal component")
        })?;
        Ok(Self {
            origin,
            direction,
            max_angle: settings.max_angle,
            activation_range: settings.activation_range,
            active_duration: settings.active_duration,
            cos_half_angle: (settings.max_angle * 0.5).to_radians().cos(),
        })
    }

    /// World position of the scan origin.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit spread direction on the XZ plane.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Full cone aperture in degrees.
    pub fn max_angle(&self) -> f64 {
        self.max_angle
    }

    /// Activation radius around the origin.
    pub fn activation_range(&self) -> f64 {
        self.activation_range
    }

    /// Seconds this activation stays current.
    pub fn active_duration(&self) -> f64 {
        self.active_duration
    }

    /// Whether `position` lies inside the planar cone around the spread direction.
    ///
    /// A position with no planar offset from the origin has no direction and is never inside.
    /// The half-angle test means `max_angle = 180` admits only the forward half-plane; use 360
    /// to admit every direction.
    pub fn inside_angle(&self, position: Vec3) -> bool {
        let Some(to_position) = planar_direction(position - self.origin) else {
            return false;
        };
        self.direction.dot(to_position) >= self.cos_half_angle - ANGLE_EPSILON
    }

    /// Whether `position` is within `activation_range` of the origin (3D distance).
    pub fn inside_range(&self, position: Vec3) -> bool {
        self.origin.distance_squared(position) <= self.activation_range * self.activation_range
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scan/activation.rs"]
mod tests;
