use crate::foundation::error::{ScanError, ScanResult};

pub use glam::DVec3 as Vec3;

/// Fixed sampling rate used when baking a timeline, in samples per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SampleRate(u32);

impl SampleRate {
    /// Production bake rate.
    pub const DEFAULT_HZ: u32 = 240;

    /// Build a sample rate; `hz` must be > 0.
    pub fn new(hz: u32) -> ScanResult<Self> {
        if hz == 0 {
            return Err(ScanError::config("SampleRate must be > 0"));
        }
        Ok(Self(hz))
    }

    /// Samples per second.
    pub fn hz(self) -> u32 {
        self.0
    }

    /// Fixed step between two consecutive samples, in seconds.
    pub fn step_secs(self) -> f64 {
        1.0 / f64::from(self.0)
    }

    /// Time of sample `index`, computed by multiplication so long bakes do not drift.
    pub fn sample_time(self, index: u64) -> f64 {
        (index as f64) / f64::from(self.0)
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self(Self::DEFAULT_HZ)
    }
}

/// Project `v` onto the XZ plane (Y is up).
pub fn flatten_xz(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Unit planar direction of `v`, or `None` when its XZ projection has no length.
pub fn planar_direction(v: Vec3) -> Option<Vec3> {
    let flat = flatten_xz(v);
    let len_sq = flat.length_squared();
    if !len_sq.is_finite() || len_sq <= f64::EPSILON * f64::EPSILON {
        return None;
    }
    Some(flat / len_sq.sqrt())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
